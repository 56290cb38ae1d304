use crate::vk;

/// Runs the two-call idiom: query the count with a null pointer, then fill a
/// vector of that capacity.
///
/// The count can grow between the two calls, in which case the driver reports
/// `INCOMPLETE` and the query starts over. Any other non-success result is
/// returned as the error.
pub fn enumerate<T, F>(mut f: F) -> Result<Vec<T>, vk::Result>
where
    F: FnMut(&mut u32, *mut T) -> vk::Result,
{
    let mut items = Vec::new();
    loop {
        let mut count = 0;
        f(&mut count, std::ptr::null_mut()).result()?;

        items.clear();
        items.reserve_exact(count as usize);

        let result = f(&mut count, items.as_mut_ptr());
        if result == vk::Result::INCOMPLETE {
            continue;
        }
        result.result()?;

        // SAFETY: the driver initialized the first `count` elements, and never
        // writes more than the capacity it was given.
        unsafe { items.set_len((count as usize).min(items.capacity())) };
        return Ok(items);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_all_items() {
        let source = [1u32, 2, 3];
        let items = enumerate(|count, out: *mut u32| {
            if out.is_null() {
                *count = source.len() as u32;
            } else {
                let n = (*count as usize).min(source.len());
                unsafe { std::ptr::copy_nonoverlapping(source.as_ptr(), out, n) };
                *count = n as u32;
            }
            vk::Result::SUCCESS
        })
        .unwrap();
        assert_eq!(items, source);
    }

    #[test]
    fn retries_when_incomplete() {
        let mut calls = 0;
        let items = enumerate(|count, out: *mut u64| {
            calls += 1;
            // The list grows after the first count query.
            let available: &[u64] = if calls <= 2 { &[7] } else { &[7, 8] };
            if out.is_null() {
                *count = available.len() as u32;
                return vk::Result::SUCCESS;
            }
            let n = (*count as usize).min(available.len());
            unsafe { std::ptr::copy_nonoverlapping(available.as_ptr(), out, n) };
            *count = n as u32;
            if calls == 2 {
                vk::Result::INCOMPLETE
            } else {
                vk::Result::SUCCESS
            }
        })
        .unwrap();
        assert_eq!(items, [7, 8]);
        assert_eq!(calls, 4);
    }

    #[test]
    fn propagates_errors() {
        let result = enumerate::<u32, _>(|_, _| vk::Result::ERROR_INITIALIZATION_FAILED);
        assert_eq!(result, Err(vk::Result::ERROR_INITIALIZATION_FAILED));
    }
}
