use std::future::Future;

pub fn invoke<R, F>(f: F) -> R
where
    F: FnOnce() -> R,
{
    f()
}

pub async fn invoke_async<R, F, Fut>(f: F) -> R
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = R>,
{
    f().await
}
