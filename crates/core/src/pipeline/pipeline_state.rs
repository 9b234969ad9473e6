use crate::shared::color_map_error::ErrorKind;

/// Lifecycle of a [`CreateColorMapUseCase`](super::create_color_map_use_case::CreateColorMapUseCase).
///
/// `Idle -> Sizing -> Sampling -> Finalizing -> Done`, or `Failed` from
/// any state but `Done`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineState {
    Idle,
    Sizing,
    Sampling,
    Finalizing,
    Done,
    Failed(ErrorKind),
}
