use std::mem;

/// Rounds `value` up to the next multiple of `align`.
///
/// `align` must be a power of two.
///
/// # Examples
///
/// ```rust
/// use rarena::align_up;
///
/// assert_eq!(align_up!(13, 8), 16);
/// assert_eq!(align_up!(4096, 4096), 4096);
/// assert_eq!(align_up!(4097, 4096), 8192);
/// ```
#[macro_export]
macro_rules! align_up {
  ($value:expr, $align:expr) => {
    ($value + $align - 1) & !($align - 1)
  };
}

/// Resolves the alignment actually used for a request.
///
/// Zero stands for "machine word", anything else must be a power of two.
pub fn effective_alignment(alignment: usize) -> usize {
  if alignment == 0 {
    return mem::size_of::<usize>();
  }

  assert!(
    alignment.is_power_of_two(),
    "alignment {alignment} is not a power of two"
  );

  alignment
}

/// Bytes of padding needed so that `address + offset` is a multiple of
/// `alignment`.
///
/// # Examples
///
/// ```rust
/// use rarena::alignment_offset;
///
/// assert_eq!(alignment_offset(0x1001, 8), 7);
/// assert_eq!(alignment_offset(0x1000, 8), 0);
/// assert_eq!(alignment_offset(0x1001, 1), 0);
/// ```
pub fn alignment_offset(
  address: usize,
  alignment: usize,
) -> usize {
  let alignment = effective_alignment(alignment);
  let misalignment = address & (alignment - 1);

  if misalignment == 0 { 0 } else { alignment - misalignment }
}
