use crate::result::GitHubClientResult;
use anyhow::anyhow;
use reqwest::header::{HeaderMap, LINK};
use reqwest::Url;
use std::collections::HashMap;

/// Pagination relations advertised by a `Link` response header.
#[derive(Debug, Default, PartialEq)]
pub(crate) struct LinkUrls {
    pub(crate) next_url: Option<Url>,
    pub(crate) last_url: Option<Url>,
}

impl LinkUrls {
    pub(crate) fn from_headers(headers: &HeaderMap) -> GitHubClientResult<LinkUrls> {
        let Some(link_header) = headers.get(LINK) else {
            return Ok(LinkUrls::default());
        };

        let links = Self::parse_link_header(link_header.to_str().map_err(|e| anyhow!(e))?);

        Ok(LinkUrls {
            next_url: Self::get_link_url(&links, "next")?,
            last_url: Self::get_link_url(&links, "last")?,
        })
    }

    fn parse_link_header(s: &str) -> HashMap<String, String> {
        fn parse_url_part(s: &str) -> Option<String> {
            s.strip_prefix('<')
                .and_then(|s0| s0.strip_suffix('>'))
                .map(|s1| s1.to_string())
        }

        fn parse_rel_part(s: &str) -> Option<String> {
            s.strip_prefix("rel=\"")
                .and_then(|s0| s0.strip_suffix('"'))
                .map(|s1| s1.to_string())
        }

        s.split(',')
            .filter_map(|part| {
                part.split_once(';').and_then(|(u, r)| {
                    parse_url_part(u.trim())
                        .and_then(|u0| parse_rel_part(r.trim()).map(|r0| (r0, u0)))
                })
            })
            .collect::<HashMap<_, _>>()
    }

    fn get_link_url(links: &HashMap<String, String>, k: &str) -> GitHubClientResult<Option<Url>> {
        let Some(s) = links.get(k) else {
            return Ok(None);
        };

        Ok(Some(s.parse::<Url>()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    fn headers(link: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(LINK, HeaderValue::from_str(link).unwrap());
        headers
    }

    #[test]
    fn no_link_header() {
        let link_urls = LinkUrls::from_headers(&HeaderMap::new()).unwrap();
        assert_eq!(link_urls, LinkUrls::default());
    }

    #[test]
    fn next_and_last() {
        let link_urls = LinkUrls::from_headers(&headers(
            "<https://api.github.com/user/repos?per_page=100&page=2>; rel=\"next\", \
             <https://api.github.com/user/repos?per_page=100&page=5>; rel=\"last\"",
        ))
        .unwrap();
        assert_eq!(
            link_urls.next_url.unwrap().as_str(),
            "https://api.github.com/user/repos?per_page=100&page=2"
        );
        assert_eq!(
            link_urls.last_url.unwrap().as_str(),
            "https://api.github.com/user/repos?per_page=100&page=5"
        );
    }

    #[test]
    fn last_page_has_no_next() {
        let link_urls = LinkUrls::from_headers(&headers(
            "<https://api.github.com/user/repos?page=1>; rel=\"first\", \
             <https://api.github.com/user/repos?page=4>; rel=\"prev\"",
        ))
        .unwrap();
        assert!(link_urls.next_url.is_none());
        assert!(link_urls.last_url.is_none());
    }

    #[test]
    fn malformed_parts_are_skipped() {
        let link_urls = LinkUrls::from_headers(&headers(
            "garbage, <https://api.github.com/x?page=2>; rel=\"next\"",
        ))
        .unwrap();
        assert!(link_urls.next_url.is_some());
    }

    #[test]
    fn bad_url_for_known_relation_is_an_error() {
        assert!(LinkUrls::from_headers(&headers("<not a url>; rel=\"next\"")).is_err());
    }
}
