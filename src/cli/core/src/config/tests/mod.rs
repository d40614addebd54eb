/* src/cli/core/src/config/tests/mod.rs */

use super::loader::{CONFIG_FILE, parse_config};
use super::*;
