//! JSON runtime configuration for the `pair_cluster` binary.

pub mod cluster;

pub use cluster::{
    load_config, parse_config, ClusterToolConfig, OutputConfig, OutputFormat, ParamsConfig,
};
