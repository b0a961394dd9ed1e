//! Generic list helpers used by focus and window cycling.

/// Find element relative to a reference element.
///
/// eg. to get the next element, use `shift` 1,
/// to get the previous element, use `shift` -1.
pub fn relative_find<T, F>(
    list: &[T],
    reference_finder: F,
    shift: i32,
    should_loop: bool,
) -> Option<&T>
where
    F: Fn(&T) -> bool,
{
    let len = i32::try_from(list.len()).ok()?;
    if len == 0 {
        return None;
    }
    let reference_index = list.iter().position(reference_finder)?;
    let loops = if shift.is_negative() {
        shift.unsigned_abs() as usize > reference_index
    } else {
        shift as usize > list.len() - (reference_index + 1)
    };

    let relative_index = if loops && !should_loop {
        None
    } else {
        let shift = shift % len;
        let shifted_index = reference_index as i32 + shift;
        let max_index = len - 1;
        if shifted_index < 0 {
            Some((len + shifted_index) as usize)
        } else if shifted_index > max_index {
            Some((shifted_index - len) as usize)
        } else {
            Some(shifted_index as usize)
        }
    }?;

    list.get(relative_index)
}
