//! Serves the embedded frontend bundle.
//!
//! Page routes fall back to `index.html` so the single-page app can be
//! reloaded on any URL. Paths that name a file (`app.js`, `app_bg.wasm`) and
//! are missing from the bundle answer `404` instead, so a stale script tag
//! does not receive HTML in place of code.
//!
//! `index.html` is served with `no-cache` so a rebuilt host picks up the new
//! hashed asset names; the hashed assets themselves never change and are
//! cached for a year.

use actix_web::http::header::{CacheControl, CacheDirective};
use actix_web::{HttpRequest, HttpResponse};
use include_dir::{include_dir, Dir, File};
use log::debug;
use mime_guess::from_path;

const INDEX: &str = "index.html";
const ONE_YEAR: u32 = 60 * 60 * 24 * 365;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

/// What a request path resolves to inside the bundle.
enum Lookup {
    /// The app shell, either asked for or used as the page-route fallback.
    Index(&'static File<'static>),
    Asset(&'static File<'static>),
    Missing,
}

fn resolve(path: &str) -> Lookup {
    let path = path.trim_start_matches('/');
    if path.is_empty() || path == INDEX {
        return index();
    }

    if let Some(file) = STATIC_DIR.get_file(path) {
        return Lookup::Asset(file);
    }

    if looks_like_file(path) {
        Lookup::Missing
    } else {
        index()
    }
}

fn index() -> Lookup {
    match STATIC_DIR.get_file(INDEX) {
        Some(file) => Lookup::Index(file),
        None => Lookup::Missing,
    }
}

/// Whether the last path segment carries an extension.
fn looks_like_file(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .and_then(|segment| segment.rsplit_once('.'))
        .is_some_and(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
}

pub async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    match resolve(req.path()) {
        Lookup::Index(file) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .insert_header(CacheControl(vec![CacheDirective::NoCache]))
            .body(file.contents()),
        Lookup::Asset(file) => {
            let mime = from_path(file.path()).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .insert_header(CacheControl(vec![
                    CacheDirective::Public,
                    CacheDirective::MaxAge(ONE_YEAR),
                    CacheDirective::Extension("immutable".to_owned(), None),
                ]))
                .body(file.contents())
        }
        Lookup::Missing => {
            debug!("no bundle file for {}", req.path());
            HttpResponse::NotFound()
                .content_type("text/plain; charset=utf-8")
                .body(format!("{} is not part of the form builder bundle", req.path()))
        }
    }
}
