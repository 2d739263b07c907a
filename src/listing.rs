use crate::resolve::DirEntry;
use crate::size::format_size;
use crate::templates::DIRECTORY_TEMPLATE;

/// Listings display the request's url path, never the filesystem path, so
/// the server root renders as `/`. The trailing slash makes child hrefs
/// compose as `display_name + entry name`.
pub fn display_name(url_path: &str) -> String {
    if url_path.ends_with('/') {
        url_path.to_string()
    } else {
        format!("{url_path}/")
    }
}

/// Renders the listing page for one directory: one link per entry, in the
/// order the entries were handed over.
pub fn render(display_name: &str, entries: &[DirEntry]) -> String {
    let links = entries
        .iter()
        .map(|entry| {
            if entry.is_dir {
                format!(
                    "<p>📁 - <a href=\"{display_name}{name}\">{name}</a></p>",
                    name = entry.name
                )
            } else {
                format!(
                    "<p>📄 - <a href=\"{display_name}{name}\">{name}</a> - {size}</p>",
                    name = entry.name,
                    size = format_size(entry.size)
                )
            }
        })
        .collect::<Vec<_>>()
        .join("");

    DIRECTORY_TEMPLATE
        .replace("$DIRECTORY$", display_name)
        .replacen("$LINKS$", &links, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str, size: u64) -> DirEntry {
        DirEntry {
            name: name.to_string(),
            is_dir: false,
            size,
        }
    }

    fn dir(name: &str) -> DirEntry {
        DirEntry {
            name: name.to_string(),
            is_dir: true,
            size: 0,
        }
    }

    #[test]
    fn display_name_always_ends_with_a_slash() {
        assert_eq!(display_name("/"), "/");
        assert_eq!(display_name("/docs"), "/docs/");
        assert_eq!(display_name("/docs/"), "/docs/");
    }

    #[test]
    fn one_anchor_per_entry() {
        let entries = [file("a.txt", 5), dir("sub"), file("b.bin", 2048)];
        let html = render("/docs/", &entries);
        assert_eq!(html.matches("<a href=").count(), entries.len());
    }

    #[test]
    fn hrefs_compose_display_name_and_entry_name() {
        let html = render("/docs/", &[file("a.txt", 5), dir("sub")]);
        assert!(html.contains("<a href=\"/docs/a.txt\">a.txt</a>"));
        assert!(html.contains("<a href=\"/docs/sub\">sub</a>"));
    }

    #[test]
    fn files_get_a_size_and_directories_a_folder_glyph() {
        let html = render("/", &[file("a.txt", 5), dir("sub")]);
        assert!(html.contains("📄 - <a href=\"/a.txt\">a.txt</a> - 5.00B"));
        assert!(html.contains("📁 - <a href=\"/sub\">sub</a>"));
    }

    #[test]
    fn page_heading_carries_the_display_name() {
        let html = render("/", &[]);
        assert!(html.contains("<title>/</title>"));
        assert!(html.contains("<h1>Contents of /</h1>"));
        assert!(!html.contains("$DIRECTORY$"));
        assert!(!html.contains("$LINKS$"));
    }

    #[test]
    fn entries_keep_their_given_order() {
        let html = render("/", &[file("z.txt", 1), file("a.txt", 1)]);
        let z = html.find("z.txt").expect("z.txt rendered");
        let a = html.find("a.txt").expect("a.txt rendered");
        assert!(z < a);
    }
}
