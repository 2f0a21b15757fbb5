use upshot::{failure, success, Outcome};

/// `Success(())` when `condition` holds, otherwise `Failure(error)`.
///
/// # Examples
///
/// ```
/// use upshot_util::guard::pass_if;
///
/// let input = "rust";
/// assert!(pass_if(!input.is_empty(), "empty input").is_success());
/// assert_eq!(pass_if(input.len() > 8, "too short").error(), Some("too short"));
/// ```
pub fn pass_if<E>(condition: bool, error: E) -> Outcome<(), E> {
    if condition {
        success(())
    } else {
        failure(error)
    }
}

/// `Failure(error)` when `condition` holds, otherwise `Success(())`.
pub fn fail_if<E>(condition: bool, error: E) -> Outcome<(), E> {
    pass_if(!condition, error)
}
