mod search_mixer;
mod security_filter;

pub use search_mixer::SearchMixer;
pub use security_filter::SecurityFilter;

#[cfg(test)]
mod mixing_test;
