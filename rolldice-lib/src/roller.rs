use crate::dice::Dice;
use crate::roll;
use crate::roll::group::Group;
use rand::Rng;

/// Default random dice roller
pub struct RandomSource<'a, T: Rng> {
    pub generator: &'a mut T,
}

impl<T: Rng> roll::Source for RandomSource<'_, T> {
    fn throw(&mut self, sides: u64) -> u64 {
        self.generator.gen_range(1..=sides)
    }
}

/// Represent the roll aggregator
pub(crate) struct Roller;

impl Roller {
    /// Produce one group result per requested roll, in order
    pub(crate) fn eval<S: roll::Source>(dice: &Dice, source: &mut S) -> roll::Outcome {
        let groups = (0..dice.rolls)
            .map(|_| Self::eval_group(dice, source))
            .collect();
        roll::Outcome::new(groups)
    }

    /// Roll one group: throw every die in order, drop the lowest results,
    /// then multiply the kept sum before adding the modifier
    fn eval_group<S: roll::Source>(dice: &Dice, source: &mut S) -> Group {
        let values: Vec<u64> = (0..dice.dice).map(|_| source.throw(dice.faces)).collect();

        let mut kept = vec![true; values.len()];
        let mut dropped = Vec::with_capacity(dice.drop as usize);
        for _ in 0..dice.drop {
            let mut lowest: Option<usize> = None;
            for (index, &value) in values.iter().enumerate() {
                // strict comparison: the first of tied minima wins
                if kept[index] && lowest.map_or(true, |low| value < values[low]) {
                    lowest = Some(index);
                }
            }
            // drop < dice, so at least one die is still kept
            let lowest = lowest.unwrap();
            kept[lowest] = false;
            dropped.push(values[lowest]);
        }

        let sum: i64 = values
            .iter()
            .zip(&kept)
            .filter(|(_, &kept)| kept)
            .map(|(&value, _)| value as i64)
            .sum();
        let total = sum * dice.multiplier + dice.modifier;

        Group::new(values, dropped, dice.multiplier, dice.modifier, total)
    }
}
