use std::fmt::Write;

use reel_core::{AppViewModel, DetailView, ErrorView, MovieDetail, MovieSummary, SearchPhase};

const NO_IMAGE: &str = "No Image";
const NO_RESULTS: &str = "No movies found";

/// Renders the whole screen as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    match &view.detail {
        Some(detail) => render_detail(&mut out, detail),
        None => render_search(&mut out, view),
    }
    out
}

fn render_search(out: &mut String, view: &AppViewModel) {
    let phase = match view.phase {
        SearchPhase::Idle => "idle",
        SearchPhase::Searching => "searching",
        SearchPhase::Loaded => "loaded",
        SearchPhase::Failed => "failed",
    };
    let _ = writeln!(
        out,
        "Search: {:?} | {} | page {} | {} of {} results",
        view.query,
        phase,
        view.page,
        view.results.len(),
        view.total_count
    );
    if view.input != view.query {
        let _ = writeln!(out, "Input: {}", view.input);
    }

    if !view.suggestions.is_empty() {
        let _ = writeln!(out, "Suggestions:");
        for (n, movie) in view.suggestions.iter().enumerate() {
            let _ = writeln!(out, "  [{}] {} ({})", n + 1, movie.title, movie.year);
        }
    }

    if let Some(error) = &view.error {
        render_error(out, error);
    }

    if view.no_results {
        let _ = writeln!(out, "{NO_RESULTS}");
    }

    for (n, movie) in view.results.iter().enumerate() {
        let _ = writeln!(out, "{:>3}. {}", n + 1, summary_line(movie));
    }

    if view.loading {
        let _ = writeln!(out, "Loading...");
    } else if view.has_more && !view.results.is_empty() {
        let _ = writeln!(out, "-- more results: `more` --");
    }
}

fn summary_line(movie: &MovieSummary) -> String {
    format!(
        "{} ({}) {} {} [{}]",
        movie.title,
        movie.year,
        movie.kind,
        movie.id,
        movie.poster_url.as_deref().unwrap_or(NO_IMAGE)
    )
}

fn render_error(out: &mut String, error: &ErrorView) {
    let _ = writeln!(out, "Error: {}", error.message);
    if let Some(remediation) = error.remediation {
        let _ = writeln!(out, "  {remediation}");
    }
}

fn render_detail(out: &mut String, view: &DetailView) {
    if view.loading {
        let _ = writeln!(out, "Loading {}...", view.id);
        return;
    }
    if let Some(error) = &view.error {
        render_error(out, error);
        let _ = writeln!(out, "(`back` to return)");
        return;
    }
    let Some(detail) = &view.detail else {
        return;
    };
    render_detail_fields(out, detail);
    let _ = writeln!(out, "(`back` to return)");
}

fn render_detail_fields(out: &mut String, detail: &MovieDetail) {
    let _ = writeln!(out, "{} ({})", detail.title, detail.year);
    let _ = writeln!(out, "Poster: {}", detail.poster_url.as_deref().unwrap_or(NO_IMAGE));

    let fields = [
        ("Rated", &detail.rated),
        ("Released", &detail.released),
        ("Runtime", &detail.runtime),
        ("Genre", &detail.genre),
        ("Director", &detail.director),
        ("Writer", &detail.writer),
        ("Actors", &detail.actors),
        ("Language", &detail.language),
        ("Country", &detail.country),
        ("Awards", &detail.awards),
        ("Metascore", &detail.metascore),
        ("IMDb rating", &detail.imdb_rating),
        ("IMDb votes", &detail.imdb_votes),
        ("Production", &detail.production),
        ("Website", &detail.website),
    ];
    for (label, value) in fields {
        if !value.is_empty() && value.as_str() != "N/A" {
            let _ = writeln!(out, "{label}: {value}");
        }
    }
    if let Some(box_office) = &detail.box_office {
        let _ = writeln!(out, "Box office: {box_office}");
    }
    for rating in &detail.ratings {
        let _ = writeln!(out, "  {}: {}", rating.source, rating.value);
    }
    if !detail.plot.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", detail.plot);
    }
}
