use crate::entities::Page;

pub(crate) fn page_caption<T>(page: &Page<T>) -> String {
    let noun = if page.total_count == 1 {
        "record"
    } else {
        "records"
    };
    if page.total_pages == 0 {
        return format!("No {noun}");
    }
    format!(
        "Page {} of {} ({} {noun})",
        page.current_page, page.total_pages, page.total_count
    )
}
