use super::*;
use ndarray::Array2;

/// Places a mine on every cell independently with probability `density`.
///
/// There is no placement constraint: the board may have no mines, no safe
/// cells, or a mine under the first click.
#[derive(Clone, Debug, PartialEq)]
pub struct DensityMineGenerator {
    seed: u64,
}

impl DensityMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for DensityMineGenerator {
    fn generate(self, config: BoardConfig) -> MineLayout {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines: Array2<bool> = Array2::default(config.size.to_nd_index());

        let (x_end, y_end) = config.size;
        for x in 0..x_end {
            for y in 0..y_end {
                let draw: f64 = rng.random();
                mines[(x, y).to_nd_index()] = draw < config.density;
            }
        }

        let layout = MineLayout::from_mine_mask(mines);
        if layout.safe_cell_count() == 0 {
            log::warn!(
                "Generated board of size {:?} has no safe cells, density {}",
                config.size,
                config.density
            );
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: Coord2, density: f64) -> BoardConfig {
        BoardConfig::new(size.0.into(), size.1.into(), density).unwrap()
    }

    #[test]
    fn same_seed_gives_same_layout() {
        let a = DensityMineGenerator::new(7).generate(config((16, 16), 0.2));
        let b = DensityMineGenerator::new(7).generate(config((16, 16), 0.2));

        assert_eq!(a, b);
    }

    #[test]
    fn zero_density_places_no_mines() {
        let layout = DensityMineGenerator::new(1).generate(config((10, 4), 0.0));

        assert_eq!(layout.size(), (10, 4));
        assert_eq!(layout.mine_count(), 0);
    }

    #[test]
    fn mine_count_tracks_density() {
        let layout = DensityMineGenerator::new(42).generate(config((100, 100), 0.25));

        // 10000 Bernoulli(0.25) draws, mean 2500 and std-dev about 43
        let count = layout.mine_count();
        assert!((2200..=2800).contains(&count), "count = {count}");
    }
}
