use reqwest::Url;

mod format;
mod testserver;
mod view_state;

pub fn example_url(path: &str) -> Url {
    Url::parse("http://example.test/api/v1/").unwrap().join(path).unwrap()
}
