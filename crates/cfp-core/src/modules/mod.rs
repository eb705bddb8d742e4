pub mod budget;
pub mod cfp;
pub mod coc;
pub mod crch;
pub mod name_file;
pub mod serialization;
pub mod writer;

mod traits;

pub use budget::{NodeBudget, parse_node_budget, read_default_node_budget, read_node_budget};
pub use cfp::{ConduitNetwork, NetworkFiles, SolverSettings};
pub use coc::OutputControl;
pub use crch::RechargeRouting;
pub use name_file::{NameFileUnits, update_name_file};
pub use traits::{PackageBuilder, build_packages};
pub use writer::{DEFAULT_SUFFIXES, write_input_files, write_input_files_with_suffixes};
