//! Food placement
//!
//! Rejection sampling first; after `attempts` misses the free cells are
//! enumerated and one is picked uniformly. Returns `None` only when the
//! snake covers the whole board.

use rand::Rng;
use rand::seq::IndexedRandom;

use super::state::{Cell, Snake};

pub fn place_food<R: Rng + ?Sized>(
    snake: &Snake,
    tile_count: i32,
    attempts: u32,
    rng: &mut R,
) -> Option<Cell> {
    if tile_count <= 0 {
        return None;
    }

    for _ in 0..attempts {
        let cell = Cell::new(rng.random_range(0..tile_count), rng.random_range(0..tile_count));
        if !snake.contains(cell) {
            return Some(cell);
        }
    }

    let area = usize::try_from(tile_count.checked_mul(tile_count)?).ok()?;
    let mut occupied = vec![false; area];
    for cell in snake.iter().filter(|c| c.in_bounds(tile_count)) {
        occupied[(cell.y * tile_count + cell.x) as usize] = true;
    }
    let free: Vec<Cell> = (0..tile_count)
        .flat_map(|y| (0..tile_count).map(move |x| Cell::new(x, y)))
        .filter(|c| !occupied[(c.y * tile_count + c.x) as usize])
        .collect();

    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    /// Snake filling the first `len` cells of the board in row-major order
    fn row_major_snake(tile_count: i32, len: usize) -> Snake {
        let cells = (0..tile_count)
            .flat_map(|y| (0..tile_count).map(move |x| Cell::new(x, y)))
            .take(len.max(1));
        Snake::from_cells(cells).unwrap()
    }

    #[test]
    fn test_full_board_has_no_food() {
        let snake = row_major_snake(3, 9);
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(place_food(&snake, 3, 16, &mut rng), None);
    }

    #[test]
    fn test_oversized_board_does_not_overflow() {
        let snake = Snake::new(Cell::new(0, 0));
        let mut rng = Pcg32::seed_from_u64(1);
        assert_eq!(place_food(&snake, i32::MAX, 0, &mut rng), None);
    }

    #[test]
    fn test_single_free_cell_found_without_sampling() {
        let snake = row_major_snake(4, 15);
        let mut rng = Pcg32::seed_from_u64(9);
        assert_eq!(place_food(&snake, 4, 0, &mut rng), Some(Cell::new(3, 3)));
    }

    #[test]
    fn test_thousand_placements_avoid_snake() {
        let tile_count = 10;
        let mut rng = Pcg32::seed_from_u64(2024);
        for i in 0..1000 {
            let len = 1 + (i * 7) % 99;
            let snake = row_major_snake(tile_count, len);
            let food = place_food(&snake, tile_count, 32, &mut rng).unwrap();
            assert!(food.in_bounds(tile_count));
            assert!(!snake.contains(food), "food {:?} on snake of length {}", food, len);
        }
    }

    proptest! {
        #[test]
        fn prop_food_never_on_snake(seed in any::<u64>(), len in 1usize..=64, attempts in 0u32..8) {
            let snake = row_major_snake(8, len);
            let mut rng = Pcg32::seed_from_u64(seed);
            let food = place_food(&snake, 8, attempts, &mut rng);
            if len >= 64 {
                prop_assert!(food.is_none());
            } else {
                let food = food.unwrap();
                prop_assert!(food.in_bounds(8));
                prop_assert!(!snake.contains(food));
            }
        }
    }
}
