//! Collection NSID validation for app permission scoping.
//!
//! DESIGN
//! ======
//! Apps may only claim record collections under their own domain, expressed
//! as a reversed-domain NSID prefix: domain `myapp.example.com` owns
//! collections under `com.example.myapp.`. Validation runs client-side so
//! form feedback is immediate; the backend enforces the same rule
//! authoritatively.

#[cfg(test)]
#[path = "collections_test.rs"]
mod collections_test;

/// Reversed-domain prefix a collection NSID must start with.
///
/// `myapp.example.com` becomes `com.example.myapp.` (trailing dot included).
/// Returns `None` for an empty domain.
pub fn reversed_domain_prefix(domain: &str) -> Option<String> {
    let domain = domain.trim();
    if domain.is_empty() {
        return None;
    }
    let mut parts: Vec<&str> = domain.split('.').collect();
    parts.reverse();
    let mut prefix = parts.join(".");
    prefix.push('.');
    Some(prefix)
}

/// Whether `collection` belongs to the app's domain namespace.
pub fn collection_matches_domain(collection: &str, domain: &str) -> bool {
    match reversed_domain_prefix(domain) {
        Some(prefix) => collection.starts_with(&prefix),
        None => false,
    }
}

/// Validate a new collection entry against the app domain and the entries
/// already added. Returns the trimmed NSID on success, or a user-facing
/// message on rejection.
///
/// # Errors
///
/// Returns a message when the NSID does not carry the reversed-domain
/// prefix, or duplicates an existing entry.
pub fn validate_new_collection(candidate: &str, domain: &str, existing: &[String]) -> Result<String, String> {
    let trimmed = candidate.trim();
    if !collection_matches_domain(trimmed, domain) {
        let prefix = reversed_domain_prefix(domain).unwrap_or_default();
        return Err(format!("Collection must start with \"{prefix}\" to match your app domain"));
    }
    if existing.iter().any(|c| c == trimmed) {
        return Err("This collection already exists".to_owned());
    }
    Ok(trimmed.to_owned())
}
