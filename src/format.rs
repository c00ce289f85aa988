/// Renders a weight with as few decimals as it needs: none for whole
/// numbers, one for halves, two for anything else.
pub fn format_weight(weight: f64) -> String {
    if weight % 1.0 == 0.0 {
        format!("{weight}")
    } else if weight % 0.5 == 0.0 {
        format!("{weight:.1}")
    } else {
        format!("{weight:.2}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integers_print_without_decimal() {
        assert_eq!(format_weight(45.0), "45");
        assert_eq!(format_weight(10.0), "10");
        assert_eq!(format_weight(0.0), "0");
    }

    #[test]
    fn halves_print_one_decimal() {
        assert_eq!(format_weight(2.5), "2.5");
        assert_eq!(format_weight(47.5), "47.5");
    }

    #[test]
    fn quarters_print_two_decimals() {
        assert_eq!(format_weight(1.25), "1.25");
        assert_eq!(format_weight(0.75), "0.75");
    }

    #[test]
    fn other_fractions_render_two_decimals() {
        assert_eq!(format_weight(33.333), "33.33");
    }
}
