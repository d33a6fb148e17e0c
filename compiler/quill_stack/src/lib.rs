//! Stack growth guard for deep recursion.
//!
//! The evaluator recurses once per nested expression, statement block and
//! function call. Deeply recursive Quill programs would overflow the native
//! stack long before hitting the interpreter's call-depth limit, so every
//! recursive entry point runs inside [`ensure_sufficient_stack`].
//!
//! - **Red zone**: 128KB. Less than this remaining triggers growth.
//! - **Growth size**: 1MB per segment.

/// Minimum stack space to keep available.
const RED_ZONE: usize = 128 * 1024;

/// Stack space allocated per growth step.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
///
/// On WASM targets `f` is called directly.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests {
    use super::*;

    enum Nested {
        Leaf,
        Wrap(Box<Nested>),
    }

    fn build(depth: u64) -> Nested {
        let mut node = Nested::Leaf;
        for _ in 0..depth {
            node = Nested::Wrap(Box::new(node));
        }
        node
    }

    fn depth_of(node: &Nested) -> u64 {
        ensure_sufficient_stack(|| match node {
            Nested::Leaf => 0,
            Nested::Wrap(inner) => depth_of(inner) + 1,
        })
    }

    fn drop_iteratively(mut node: Nested) {
        while let Nested::Wrap(inner) = node {
            node = *inner;
        }
    }

    #[test]
    fn walks_deeply_nested_tree() {
        let tree = build(100_000);
        assert_eq!(depth_of(&tree), 100_000);
        drop_iteratively(tree);
    }

    #[test]
    fn passes_result_through() {
        let result: Result<i64, &str> = ensure_sufficient_stack(|| Ok(7));
        assert_eq!(result, Ok(7));
    }
}
