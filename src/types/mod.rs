pub mod encode_args;
pub mod output_guard;
pub mod sequence;
