use askama::Template;
use mg_core::models::CollectionEntry;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate<'a> {
    pub error: Option<&'a str>,
    pub next: Option<&'a str>,
}

#[derive(Template)]
#[template(path = "animals.html")]
pub struct AnimalIndexTemplate<'a> {
    pub animals: &'a [String],
}

/// Tile grid shared by the per-animal index and the favorites view.
#[derive(Template)]
#[template(path = "index.html")]
pub struct CollectionIndexTemplate<'a> {
    pub animal: &'a str,
    pub folders: &'a [CollectionEntry],
}

#[derive(Template)]
#[template(path = "board.html")]
pub struct BoardTemplate<'a> {
    pub name: &'a str,
    pub animal: Option<&'a str>,
    pub images: &'a [String],
}
