pub mod mcmc;
pub mod rejection;
