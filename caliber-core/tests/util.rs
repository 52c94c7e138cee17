#[cfg(test)]
mod tests {
    use caliber_core::{
        consume_while, is_decimal_string, is_integer_string, is_safe_integer, number_to_string,
        parse_float, parse_integer, separated_by, truncate_long,
    };

    #[test]
    fn numbers() {
        macro_rules! test_number {
            ($value:expr, $expected:literal) => {
                assert_eq!(number_to_string($value), $expected);
            };
        }
        test_number!(0.0, "0");
        test_number!(-0.0, "0");
        test_number!(42.0, "42");
        test_number!(-7.0, "-7");
        test_number!(1.5, "1.5");
        test_number!(0.1, "0.1");
        test_number!(9007199254740991.0, "9007199254740991");
        test_number!(f64::NAN, "NaN");
        test_number!(f64::INFINITY, "Infinity");
        test_number!(f64::NEG_INFINITY, "-Infinity");

        assert!(is_safe_integer(9007199254740991.0));
        assert!(!is_safe_integer(9007199254740992.0));
        assert!(!is_safe_integer(1.5));
        assert!(!is_safe_integer(f64::NAN));
    }

    #[test]
    fn parsing() {
        assert!(is_integer_string("-42"));
        assert!(!is_integer_string("-"));
        assert!(!is_integer_string("+1"));
        assert!(!is_integer_string("1.0"));
        assert!(!is_integer_string(" 1"));
        assert_eq!(parse_integer("170141183460469231731687303715884105727"), Some(i128::MAX));
        assert_eq!(parse_integer("170141183460469231731687303715884105728"), None);
        assert_eq!(parse_integer("-0012"), Some(-12));
        assert_eq!(parse_integer("12a"), None);

        assert_eq!(parse_float("1.25"), Some(1.25));
        assert_eq!(parse_float("-3e2"), Some(-300.0));
        assert_eq!(parse_float("Infinity"), Some(f64::INFINITY));
        assert!(parse_float("NaN").is_some_and(f64::is_nan));
        assert_eq!(parse_float("1.5x"), None);
        assert_eq!(parse_float(" 1.5"), None);
        assert_eq!(parse_float(""), None);
        assert_eq!(parse_float("1e400"), None);

        assert!(is_decimal_string("12.34"));
        assert!(is_decimal_string("-.5"));
        assert!(is_decimal_string("1e-3"));
        assert!(is_decimal_string("5."));
        assert!(!is_decimal_string("."));
        assert!(!is_decimal_string("1e"));
        assert!(!is_decimal_string("0x10"));
    }

    #[test]
    fn text() {
        let mut out = String::from("(");
        separated_by(&mut out, ["a", "b", "c"], |out, v| out.push_str(v), ", ");
        out.push(')');
        assert_eq!(out, "(a, b, c)");

        let mut out = String::new();
        separated_by(&mut out, ["", "x", "", "y"], |out, v| out.push_str(v), ",");
        assert_eq!(out, "x,y");

        let mut input = "123abc";
        assert_eq!(consume_while(&mut input, char::is_ascii_digit), "123");
        assert_eq!(input, "abc");
        assert_eq!(consume_while(&mut input, char::is_ascii_digit), "");
        assert_eq!(input, "abc");

        let short = "short";
        assert_eq!(format!("{}", truncate_long!(short)), "short");
        let long = "é".repeat(600);
        let truncated = format!("{}", truncate_long!(long));
        assert_eq!(truncated.chars().count(), 500);
        assert!(truncated.ends_with("é..."));
    }
}
