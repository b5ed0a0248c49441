pub mod propagation;

pub use propagation::CheckPropagationUseCase;
