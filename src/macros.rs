/// Expand one `#[test]` per named case, binding the case value to `$arg` inside the body.
#[macro_export]
macro_rules! test_cases {
  ( #[should_panic(expected = $panic_msg:literal)]
    $name:ident[$($case:ident = $value:expr),+ $(,)?]($arg:ident) $body:block ) => {$(
      ::paste::paste! {
          #[test]
          #[should_panic(expected = $panic_msg)]
          fn [<test_ $name _ $case:snake>]() {
            let $arg = $value;
            $body
          }
      }
  )+};
  ($name:ident[$($case:ident = $value:expr),+ $(,)?]($arg:ident) $body:block ) => {$(
      ::paste::paste! {
          #[test]
          fn [<test_ $name _ $case:snake>]() {
            let $arg = $value;
            $body
          }
      }
  )+};
}

#[macro_export]
macro_rules! assert_f64_approx {
    ($l:expr, $r:expr) => {
        assert!(
            ($l - $r).abs() < 1e-12,
            "assertion failed: {} !~ {}",
            $l,
            $r
        )
    };
    ($l:expr, $r:expr, $msg:expr) => {
        assert!(
            ($l - $r).abs() < 1e-12,
            "assertion failed: {} !~ {}: {}",
            $l,
            $r,
            $msg
        )
    };
}
