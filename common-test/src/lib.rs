use std::{
    cell::RefCell,
    collections::HashMap,
    env,
    error::Error,
    rc::Rc,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, SeedableRng};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn get_seeds_lock() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

fn get_seed(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = get_seeds_lock().write()?;
    Ok(*seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {seed} for {key}");
        seed
    }))
}

/// Returns a rng whose seed is printed, and can be replayed through `DEFAULT_TEST_SEED`.
pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    let seed = get_seed(DEFAULT_TEST_SEED_ENV)?;
    Ok(StdRng::seed_from_u64(seed))
}

/// Shared, ordered record of invocations made during a test.
#[derive(Clone, Debug, Default)]
pub struct Journal {
    entries: Rc<RefCell<Vec<String>>>,
}

impl Journal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, entry: impl Into<String>) {
        self.entries.borrow_mut().push(entry.into());
    }

    pub fn entries(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.entries.borrow_mut().clear();
    }
}
