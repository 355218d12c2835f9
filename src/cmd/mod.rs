/// Descriptor table command.
pub mod describe;
/// Default document dump command.
pub mod dump;
/// Built-in demo hosts.
pub mod hosts;
/// Document load command.
pub mod load;

mod util;

#[cfg(test)]
mod test_support;
