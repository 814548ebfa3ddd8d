pub mod cd;
pub mod events;
pub mod rollouts;
pub mod workflows;

#[cfg(test)]
mod tests;
