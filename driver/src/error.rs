use kernel::KernelError;

/// Maps a driver level error onto the [`KernelError`] taxonomy.
pub trait ConvertError: Sized {
    type Ok;
    fn convert_error(self) -> error_stack::Result<Self::Ok, KernelError>;
}
