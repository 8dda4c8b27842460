mod common;
mod import;
mod ranking;
mod weighting;
