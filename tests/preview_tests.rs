use std::sync::Arc;
use proptest::prelude::*;
use tempfile::TempDir;
use spaces_cli::services::preview_renderer::PreviewRenderer;
use spaces_cli::structs::editor::file_set::FileSet;
use spaces_cli::traits::preview_sink::PreviewSink;
use spaces_cli::ui::file_preview::FilePreview;
use spaces_cli::ui::shared_preview::SharedPreview;

#[test]
fn document_wraps_the_three_files() {
    let document = PreviewRenderer::render_parts("<h1>Hi</h1>", "h1{color:red}", "console.log(1)");

    assert_eq!(
        document,
        "<!DOCTYPE html>\n<html>\n<head>\n<style>h1{color:red}</style>\n</head>\n<body>\n<h1>Hi</h1>\n<script>console.log(1)</script>\n</body>\n</html>\n"
    );
}

#[test]
fn unloaded_files_render_as_empty() {
    let files = FileSet::new(["index.html", "styles.css", "script.js"]);
    assert_eq!(PreviewRenderer::render(&files), PreviewRenderer::render_parts("", "", ""));
}

#[test]
fn file_preview_replaces_the_previous_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out").join("preview.html");
    let sink = FilePreview::new(&path);

    sink.replace_document("<p>first</p>").unwrap();
    sink.replace_document("<p>second</p>").unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "<p>second</p>");
}

#[test]
fn shared_preview_bumps_its_revision() {
    let preview = SharedPreview::new();
    let sink: Arc<dyn PreviewSink> = Arc::new(preview.clone());
    assert_eq!(preview.revision(), 0);

    sink.replace_document("<p>a</p>").unwrap();
    sink.replace_document("<p>b</p>").unwrap();

    assert_eq!(preview.revision(), 2);
    assert_eq!(preview.document(), "<p>b</p>");
}

proptest! {
    #[test]
    fn render_depends_only_on_the_three_contents(
        html in ".*",
        css in ".*",
        js in ".*",
        extra in "[a-z]{1,8}\\.txt",
        noise in ".*",
    ) {
        let mut plain = FileSet::new(["index.html", "styles.css", "script.js"]);
        plain.set("index.html", html.clone());
        plain.set("styles.css", css.clone());
        plain.set("script.js", js.clone());

        let mut noisy = FileSet::new(["script.js", "index.html"]);
        noisy.set(&extra, noise);
        noisy.set("script.js", js.clone());
        noisy.set("styles.css", css.clone());
        noisy.set("index.html", html.clone());

        let document = PreviewRenderer::render(&plain);
        prop_assert_eq!(&document, &PreviewRenderer::render(&noisy));
        prop_assert_eq!(&document, &PreviewRenderer::render(&plain));
        prop_assert!(document.contains(&html));
        prop_assert!(document.contains(&css));
        prop_assert!(document.contains(&js));
    }
}
