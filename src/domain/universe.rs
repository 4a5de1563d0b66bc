//! The automaton collaborator.
//!
//! The session only drives a [`Universe`]; it never computes a generation
//! itself. [`LifeUniverse`] is the bundled toroidal Conway implementation.

use std::fmt;

use rayon::prelude::*;

use super::{Cell, codec};

/// Contract the playback controller relies on.
pub trait Universe {
    /// Random initial state
    fn new(width: u32, height: u32) -> Self
    where
        Self: Sized;

    /// Initial state with exactly `alive` set. Indices may repeat.
    fn new_with_state(width: u32, height: u32, alive: &[u32]) -> Self
    where
        Self: Sized;

    /// Advance exactly one generation
    fn tick(&mut self);

    /// Current bit-packed state, `ceil(width * height / 8)` bytes.
    /// Only valid until the next `tick`.
    fn cells(&self) -> &[u8];

    fn width(&self) -> u32;

    fn height(&self) -> u32;
}

/// Toroidal B3/S23 automaton over a bit-packed buffer.
pub struct LifeUniverse {
    width: u32,
    height: u32,
    cells: Vec<u8>,
    /// Alive indices in row-major order, rebuilt every tick
    alive: Vec<u32>,
}

impl LifeUniverse {
    fn empty(width: u32, height: u32) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![0; codec::packed_len(size)],
            alive: Vec::new(),
        }
    }

    fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    const fn get_index(&self, row: u32, col: u32) -> usize {
        (row * self.width + col) as usize
    }

    fn get(&self, row: u32, col: u32) -> bool {
        codec::is_alive(self.get_index(row, col), &self.cells)
    }

    /// Count live neighbours with toroidal wrapping
    fn live_neighbor_count(&self, row: u32, col: u32) -> u8 {
        let north = if row == 0 { self.height - 1 } else { row - 1 };
        let south = if row == self.height - 1 { 0 } else { row + 1 };
        let west = if col == 0 { self.width - 1 } else { col - 1 };
        let east = if col == self.width - 1 { 0 } else { col + 1 };

        [
            (north, west),
            (north, col),
            (north, east),
            (row, west),
            (row, east),
            (south, west),
            (south, col),
            (south, east),
        ]
        .into_iter()
        .filter(|&(r, c)| self.get(r, c))
        .count() as u8
    }

    /// Alive cell indices in row-major order
    pub fn live_cells(&self) -> &[u32] {
        &self.alive
    }

    pub fn live_count(&self) -> usize {
        self.alive.len()
    }
}

impl Universe for LifeUniverse {
    fn new(width: u32, height: u32) -> Self {
        use rand::Rng;
        let mut rng = rand::rng();

        let mut universe = Self::empty(width, height);
        for idx in 0..universe.size() {
            if rng.random_bool(0.5) {
                codec::set(idx, &mut universe.cells, true);
                universe.alive.push(idx as u32);
            }
        }
        log::debug!(
            "random universe {}x{} with {} live cells",
            width,
            height,
            universe.alive.len()
        );
        universe
    }

    fn new_with_state(width: u32, height: u32, alive: &[u32]) -> Self {
        let mut universe = Self::empty(width, height);
        let size = universe.size();
        for &idx in alive.iter().filter(|&&idx| (idx as usize) < size) {
            codec::set(idx as usize, &mut universe.cells, true);
        }
        universe.alive = (0..size as u32)
            .filter(|&idx| codec::is_alive(idx as usize, &universe.cells))
            .collect();
        log::debug!(
            "seeded universe {}x{} from {} indices, {} live cells",
            width,
            height,
            alive.len(),
            universe.alive.len()
        );
        universe
    }

    fn tick(&mut self) {
        // Rows are independent given the previous generation
        let this = &*self;
        let alive: Vec<u32> = (0..this.height)
            .into_par_iter()
            .flat_map_iter(|row| {
                (0..this.width).filter_map(move |col| {
                    let current = Cell::from(this.get(row, col));
                    let next = current.evolve(this.live_neighbor_count(row, col));
                    next.is_alive().then(|| this.get_index(row, col) as u32)
                })
            })
            .collect();

        let mut next = vec![0; self.cells.len()];
        for &idx in &alive {
            codec::set(idx as usize, &mut next, true);
        }
        self.cells = next;
        self.alive = alive;
    }

    fn cells(&self) -> &[u8] {
        &self.cells
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

impl fmt::Display for LifeUniverse {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if self.get(row, col) { '◼' } else { '◻' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
