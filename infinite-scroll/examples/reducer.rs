// Example: the pure reducer, without any stores.
use infinite_scroll::{Memo, NextLink, ResourceRecord, ResourceStatus, Snapshot, reduce};

fn main() {
    let mut snapshot = Snapshot {
        supported: true,
        fetch_in_view: false,
        route_in_view: false,
        current_link: "/blog/",
        next_link: NextLink::Present("/blog/page/2/"),
        current: Some(ResourceRecord::new("/blog/", ResourceStatus::NotRequested)),
        next: Some(ResourceRecord::new("/blog/page/2/", ResourceStatus::NotRequested)),
    };

    // First render: the current page has never been requested.
    let (memo, effects) = reduce(&Memo::default(), &snapshot);
    println!("first render: {effects:?}");

    // Same observations again: nothing to do.
    let (memo, effects) = reduce(&memo, &snapshot);
    println!("unchanged: {effects:?}");

    // The fetch sensor scrolls into view.
    snapshot.current = Some(ResourceRecord::new("/blog/", ResourceStatus::Ready));
    snapshot.fetch_in_view = true;
    let (_, effects) = reduce(&memo, &snapshot);
    println!("fetch sensor in view: {effects:?}");
}
