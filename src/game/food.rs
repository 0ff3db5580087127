use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::position::Position;

/// Picks food cells uniformly from the grid interior, away from the outer wall.
#[derive(Debug, Clone)]
pub struct FoodPlacer {
    rng: StdRng,
}

impl FoodPlacer {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Samples `[1, field_size - 2]` on both axes until the cell is not in
    /// `excluded`. Returns `None` only when every interior cell is excluded.
    pub fn place(&mut self, field_size: usize, excluded: &HashSet<Position>) -> Option<Position> {
        if free_interior_cells(field_size, excluded) == 0 {
            return None;
        }

        let upper = field_size as i32 - 1;
        loop {
            let candidate = Position::new(
                self.rng.gen_range(1..upper),
                self.rng.gen_range(1..upper),
            );
            if !excluded.contains(&candidate) {
                return Some(candidate);
            }
        }
    }
}

pub fn is_interior(pos: Position, field_size: usize) -> bool {
    let upper = field_size as i32 - 1;
    (1..upper).contains(&pos.x) && (1..upper).contains(&pos.y)
}

fn free_interior_cells(field_size: usize, excluded: &HashSet<Position>) -> usize {
    let side = field_size.saturating_sub(2);
    let taken = excluded
        .iter()
        .filter(|pos| is_interior(**pos, field_size))
        .count();
    side * side - taken
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_stays_in_interior() {
        let mut placer = FoodPlacer::new(Some(7));
        let excluded = HashSet::new();
        for _ in 0..500 {
            let pos = placer.place(6, &excluded).unwrap();
            assert!((1..=4).contains(&pos.x), "x out of interior: {:?}", pos);
            assert!((1..=4).contains(&pos.y), "y out of interior: {:?}", pos);
        }
    }

    #[test]
    fn test_food_avoids_excluded() {
        let mut placer = FoodPlacer::new(Some(42));
        // 5x5 field has a 3x3 interior; leave only (3, 3) free.
        let mut excluded = HashSet::new();
        for x in 1..=3 {
            for y in 1..=3 {
                if (x, y) != (3, 3) {
                    excluded.insert(Position::new(x, y));
                }
            }
        }

        for _ in 0..20 {
            assert_eq!(placer.place(5, &excluded), Some(Position::new(3, 3)));
        }
    }

    #[test]
    fn test_full_interior_returns_none() {
        let mut placer = FoodPlacer::new(Some(1));
        let excluded: HashSet<_> = (1..=3)
            .flat_map(|x| (1..=3).map(move |y| Position::new(x, y)))
            .collect();
        assert_eq!(placer.place(5, &excluded), None);
    }

    #[test]
    fn test_border_exclusions_do_not_count_against_interior() {
        let mut placer = FoodPlacer::new(Some(3));
        // Only the centre cell is interior on a 3x3 field.
        let excluded: HashSet<_> = [Position::new(0, 0), Position::new(2, 1)]
            .into_iter()
            .collect();
        assert_eq!(placer.place(3, &excluded), Some(Position::new(1, 1)));
    }

    #[test]
    fn test_tiny_field_has_no_interior() {
        let mut placer = FoodPlacer::new(None);
        assert_eq!(placer.place(2, &HashSet::new()), None);
        assert_eq!(placer.place(0, &HashSet::new()), None);
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let excluded = HashSet::new();
        let mut a = FoodPlacer::new(Some(99));
        let mut b = FoodPlacer::new(Some(99));
        for _ in 0..10 {
            assert_eq!(a.place(35, &excluded), b.place(35, &excluded));
        }
    }
}
