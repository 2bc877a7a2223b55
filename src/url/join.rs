use url::Url;

/// Joins a listing page URL with an entry name taken from that page
///
/// The page URL is treated as a directory: if its path does not already end
/// in `/`, one is appended before the name is resolved. This keeps
/// `http://host/dir` + `file.txt` from losing the `dir` segment (which plain
/// `Url::join` would do) and keeps `http://host/dir/` + `file.txt` from
/// gaining a second separator.
///
/// # Arguments
///
/// * `base` - The listing page URL
/// * `segment` - The entry name as shown on the page (e.g. `"file.txt"`, `"images/"`)
///
/// # Returns
///
/// * `Ok(Url)` - The absolute URL of the entry
/// * `Err(url::ParseError)` - The name could not be resolved against the page
///
/// # Examples
///
/// ```
/// use autoindex_search::url::join_url;
/// use url::Url;
///
/// let page = Url::parse("http://host/dir").unwrap();
/// assert_eq!(join_url(&page, "images/").unwrap().as_str(), "http://host/dir/images/");
///
/// let page = Url::parse("http://host/dir/").unwrap();
/// assert_eq!(join_url(&page, "a.txt").unwrap().as_str(), "http://host/dir/a.txt");
/// ```
pub fn join_url(base: &Url, segment: &str) -> Result<Url, url::ParseError> {
    as_directory(base).join(segment)
}

/// Returns the URL with a trailing `/` on its path, dropping query and fragment
pub fn as_directory(url: &Url) -> Url {
    let mut dir = url.clone();
    dir.set_query(None);
    dir.set_fragment(None);

    if !dir.path().ends_with('/') {
        let path = format!("{}/", dir.path());
        dir.set_path(&path);
    }

    dir
}
