pub mod dice;
pub mod error;
pub mod roll;

mod parser;
mod roller;

#[cfg(test)]
mod tests {
    use crate::dice::Dice;
    use crate::error::Error;
    use crate::roll::Outcome;
    use crate::roll::Source;

    pub struct MockIter<'a, T: Iterator<Item = u64>> {
        pub iter: &'a mut T,
    }

    impl<T: Iterator<Item = u64>> Source for MockIter<'_, T> {
        fn throw(&mut self, sides: u64) -> u64 {
            match self.iter.next() {
                Some(value) => {
                    if value > sides {
                        panic!("Tried to return {} for a {} sided dice", value, sides)
                    }
                    value
                }
                None => panic!("Iterator out of values"),
            }
        }
    }

    fn roll_mocked(input: &str, values: Vec<u64>) -> Outcome {
        Dice::parse(input).unwrap().roll_with_source(&mut MockIter {
            iter: &mut values.into_iter(),
        })
    }

    #[test]
    fn default_fields_test() {
        let d = Dice::parse("d").unwrap();
        assert_eq!(1, d.rolls);
        assert_eq!(1, d.dice);
        assert_eq!(6, d.faces);
        assert_eq!(1, d.multiplier);
        assert_eq!(0, d.modifier);
        assert_eq!(0, d.drop);
        assert_eq!(d, Dice::parse("d6").unwrap());
        assert_eq!(d, Dice::parse("1d6").unwrap());
        assert_eq!(d, Dice::parse("1x1d6").unwrap());
    }

    #[test]
    fn full_string_test() {
        let d = Dice::parse("3d6*2+1s1").unwrap();
        assert_eq!(1, d.rolls);
        assert_eq!(3, d.dice);
        assert_eq!(6, d.faces);
        assert_eq!(2, d.multiplier);
        assert_eq!(1, d.modifier);
        assert_eq!(1, d.drop);
    }

    #[test]
    fn parse_determinism_test() {
        let d = Dice::parse("4x3d8*2-5s2").unwrap();
        assert_eq!(d, Dice::parse("4x3d8*2-5s2").unwrap());
    }

    #[test]
    fn percent_faces_test() {
        let d = Dice::parse("2d%").unwrap();
        assert_eq!(2, d.dice);
        assert_eq!(100, d.faces);
    }

    #[test]
    fn negative_modifier_test() {
        let d = Dice::parse("2d10-4").unwrap();
        assert_eq!(-4, d.modifier);
    }

    #[test]
    fn zero_count_test() {
        // an explicit count of 0 is not an error, it means one die
        let d = Dice::parse("0d6").unwrap();
        assert_eq!(1, d.dice);
    }

    #[test]
    fn zero_faces_test() {
        // `d0` is rejected while a bare `d` takes the default
        assert!(Dice::parse("d0").is_err());
        assert!(Dice::parse("1d0").is_err());
        assert!(Dice::parse("d").is_ok());
    }

    #[test]
    fn zero_rolls_test() {
        assert!(Dice::parse("0x1d6").is_err());
        assert!(Dice::parse("0xd6").is_err());
    }

    #[test]
    fn zero_suffix_test() {
        assert!(Dice::parse("1d6*0").is_err());
        assert!(Dice::parse("1d6+0").is_err());
        assert!(Dice::parse("1d6-0").is_err());
        assert!(Dice::parse("2d6s0").is_err());
    }

    #[test]
    fn missing_d_test() {
        assert!(Dice::parse("").is_err());
        assert!(Dice::parse("6").is_err());
        assert!(Dice::parse("3x6").is_err());
        assert!(Dice::parse("xd6").is_err());
    }

    #[test]
    fn trailing_garbage_test() {
        assert!(Dice::parse("1d6z").is_err());
        assert!(Dice::parse("1d6 ").is_err());
        assert!(Dice::parse("2d6s1*2").is_err()); // suffixes out of order
        assert!(Dice::parse("d%5").is_err());
        assert!(Dice::parse("2d8\n").is_ok()); // a line terminator is fine
        assert!(Dice::parse("2d8\n\n").is_err());
    }

    #[test]
    fn drop_too_many_test() {
        assert!(Dice::parse("1d6s1").is_err());
        assert!(Dice::parse("2d6s2").is_err());
        assert!(Dice::parse("2d6s3").is_err());
        assert!(Dice::parse("2d6s1").is_ok());
    }

    #[test]
    fn overflow_test() {
        let big = "99999999999999999999";
        assert!(matches!(
            Dice::parse(&format!("{big}d6")),
            Err(Error::Overflow(_))
        ));
        assert!(matches!(
            Dice::parse(&format!("1d{big}")),
            Err(Error::Overflow(_))
        ));
        assert!(matches!(
            Dice::parse(&format!("{big}x1d6")),
            Err(Error::Overflow(_))
        ));
        // overflow stays distinct from the structural and semantic kinds
        assert!(matches!(Dice::parse("1d6z"), Err(Error::Pest(_))));
        assert!(matches!(Dice::parse("1d0"), Err(Error::Invalid(_))));
    }

    #[test]
    fn drop_lowest_test() {
        let outcome = roll_mocked("2d20s1", vec![5, 17]);
        let group = &outcome.groups()[0];
        assert_eq!(17, group.total());
        assert_eq!(vec![5, 17], group.values());
        assert_eq!(vec![5], group.dropped());
    }

    #[test]
    fn drop_tie_break_test() {
        // tied minima always drop deterministically, first index wins
        let outcome = roll_mocked("3d10s1", vec![4, 4, 9]);
        assert_eq!(13, outcome.groups()[0].total());
        assert_eq!(vec![4], outcome.groups()[0].dropped());

        let outcome = roll_mocked("3d10s2", vec![4, 4, 9]);
        assert_eq!(9, outcome.groups()[0].total());
        assert_eq!(vec![4, 4], outcome.groups()[0].dropped());
    }

    #[test]
    fn drop_order_test() {
        let outcome = roll_mocked("4d6s2", vec![5, 2, 6, 2]);
        assert_eq!(11, outcome.groups()[0].total());
        assert_eq!(vec![2, 2], outcome.groups()[0].dropped());
    }

    #[test]
    fn multiply_before_add_test() {
        // (2 + 3) * 3 - 2, never (2 + 3 - 2) * 3
        let outcome = roll_mocked("2d6*3-2", vec![2, 3]);
        assert_eq!(13, outcome.groups()[0].total());
    }

    #[test]
    fn separate_render_test() {
        let outcome = roll_mocked("3d6s1", vec![3, 3, 6]);
        assert_eq!("Roll #1: (3 3 6 -3) = 9\n", outcome.render(true));
    }

    #[test]
    fn annotated_render_test() {
        let outcome = roll_mocked("2d4*2+3", vec![1, 2]);
        assert_eq!("Roll #1: (1 2) *2 +3 = 9\n", outcome.render(true));

        let outcome = roll_mocked("1d4-5", vec![2]);
        assert_eq!("Roll #1: (2) -5 = -3\n", outcome.render(true));
        assert_eq!(-3, outcome.groups()[0].total());
    }

    #[test]
    fn compact_render_test() {
        let outcome = roll_mocked("3x1d6", vec![2, 4, 6]);
        assert_eq!("2 4 6\n", outcome.render(false));
        assert_eq!(
            "Roll #1: (2) = 2\nRoll #2: (4) = 4\nRoll #3: (6) = 6\n",
            outcome.render(true)
        );
    }

    #[test]
    fn source_order_test() {
        // groups consume the source strictly in call order
        let outcome = roll_mocked("2x2d6", vec![1, 2, 3, 4]);
        assert_eq!(3, outcome.groups()[0].total());
        assert_eq!(7, outcome.groups()[1].total());
        assert_eq!("3 7\n", outcome.render(false));
    }
}
