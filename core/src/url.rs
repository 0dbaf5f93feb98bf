//! URL builder: path-template substitution plus query-string assembly.
//!
//! Templates use `:token` path segments (`/contacts/v1/properties/:name`).
//! Params that substitute a token are consumed; the rest are appended as a
//! percent-encoded query string in caller order.

use urlencoding::encode;

/// Interpolate `template` against `base`, substituting `:token` segments from
/// `params` and appending unconsumed params as query parameters.
///
/// Substituted values and query keys/values are percent-encoded. A token with
/// no matching param is left verbatim in the path.
pub fn build_url(base: &str, template: &str, params: &[(String, String)]) -> String {
    let mut used = vec![false; params.len()];
    let mut url = String::from(base);

    for segment in template.split('/').skip(1) {
        url.push('/');
        match segment.strip_prefix(':') {
            Some(token) => match params.iter().position(|(k, _)| k == token) {
                Some(i) => {
                    used[i] = true;
                    url.push_str(&encode(&params[i].1));
                }
                None => url.push_str(segment),
            },
            None => url.push_str(segment),
        }
    }

    let mut separator = '?';
    for (i, (key, value)) in params.iter().enumerate() {
        if used[i] {
            continue;
        }
        url.push(separator);
        separator = '&';
        url.push_str(&encode(key));
        url.push('=');
        url.push_str(&encode(value));
    }

    url
}
