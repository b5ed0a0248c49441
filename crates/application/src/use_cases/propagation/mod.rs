mod check_propagation;

pub use check_propagation::CheckPropagationUseCase;
