use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

/// Значение заголовка `Authorization`, если пользователь вошёл
pub fn auth_header() -> Option<String> {
    get_access_token()
        .filter(|token| !token.trim().is_empty())
        .map(|token| bearer(&token))
}

fn bearer(token: &str) -> String {
    format!("Bearer {}", token.trim())
}
