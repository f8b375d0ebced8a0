use super::*;

/// Nesting levels of a right-leaning chain of `n` boxes.
enum Chain {
    End,
    Link(Box<Chain>),
}

fn build(n: usize) -> Chain {
    (0..n).fold(Chain::End, |tail, _| Chain::Link(Box::new(tail)))
}

fn levels(chain: &Chain, depth: Depth) -> Result<usize, DepthExceeded> {
    nested(depth, |depth| match chain {
        Chain::End => Ok(0),
        Chain::Link(next) => Ok(levels(next, depth)? + 1),
    })
}

/// Tear down iteratively; the default drop would recurse once per link.
fn dispose(mut chain: Chain) {
    while let Chain::Link(next) = chain {
        chain = *next;
    }
}

#[test]
fn test_grows_stack_for_deep_recursion() {
    fn count_down(n: u64) -> u64 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { count_down(n - 1) + 1 })
    }

    assert_eq!(count_down(100_000), 100_000);
}

#[test]
fn test_passes_closure_result_through() {
    let result: Result<&str, ()> = ensure_sufficient_stack(|| Ok("done"));
    assert_eq!(result, Ok("done"));
}

#[test]
fn test_nested_within_budget() {
    let chain = build(50);
    assert_eq!(levels(&chain, Depth::new(51)), Ok(50));
    dispose(chain);
}

#[test]
fn test_nested_reports_budget() {
    let chain = build(50);
    assert_eq!(levels(&chain, Depth::new(50)), Err(DepthExceeded { max: 50 }));
    dispose(chain);
}

#[test]
fn test_nested_deep_budget_uses_grown_stack() {
    let chain = build(200_000);
    assert_eq!(levels(&chain, Depth::new(usize::MAX)), Ok(200_000));
    dispose(chain);
}

#[test]
fn test_nested_converts_error() {
    #[derive(Debug, PartialEq)]
    struct TooDeep(usize);

    impl From<DepthExceeded> for TooDeep {
        fn from(err: DepthExceeded) -> Self {
            TooDeep(err.max)
        }
    }

    let result: Result<(), TooDeep> = nested(Depth::new(0), |_| Ok(()));
    assert_eq!(result, Err(TooDeep(0)));
}
