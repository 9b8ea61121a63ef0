// src/config/consts.rs

// Net: roster store, PostgREST-style API (self-hosted, plain HTTP)
pub const STORE_HOST: &str = "tracker.lan";
pub const STORE_PREFIX: &str = "/rest/v1/";

// Net: species catalog (local PokeAPI mirror)
pub const CATALOG_HOST: &str = "pokeapi.lan";
pub const CATALOG_PREFIX: &str = "/api/v2/";

// Local cache
pub const STORE_DIR: &str = ".store";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "roster";

// Grid (page size = rows × cols)
pub const GRID_ROWS: usize = 5;
pub const GRID_COLS: usize = 3;

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms

// Editor
pub const VALIDATE_DEBOUNCE_MS: u64 = 400;
