// Example: a simulated scroll through an archive, with in-memory collaborators.
use infinite_scroll::{CoordinatorInput, NextLink, RouterState, RouterStore, accumulated_links};
use infinite_scroll_adapter::{Controller, ManualSensor, MemoryRouter, MemorySource};

const LAST: usize = 4;

fn page(n: usize) -> String {
    if n == 1 {
        "/blog/".to_string()
    } else {
        format!("/blog/page/{n}/")
    }
}

fn input(n: usize) -> CoordinatorInput<String> {
    let next = (n < LAST).then(|| page(n + 1));
    CoordinatorInput::new(page(n), NextLink::from(next))
}

fn main() {
    let mut source = MemorySource::<String, String>::new();
    let mut router = MemoryRouter::new(page(1), RouterState::<String>::default());

    // One controller per rendered page, as a host renders one list item per page.
    let mut pages: Vec<Controller<String, ManualSensor<usize>>> = Vec::new();

    for n in 1..=LAST {
        let mut c = Controller::new(
            ManualSensor::supported(n * 2),
            ManualSensor::supported(n * 2 + 1),
        );

        // The page body crosses the route band.
        c.route_sensor_mut().set_in_view(true);
        c.settle(&input(n), &mut source, &mut router);

        // The user reaches the bottom of the page.
        c.fetch_sensor_mut().set_in_view(true);
        let settled = c.settle(&input(n), &mut source, &mut router);

        // Network round trip.
        for link in source.take_pending() {
            let body = format!("<html>{link}</html>");
            source.resolve(&link, body);
        }
        c.settle(&input(n), &mut source, &mut router);

        println!(
            "page {n}: route={} pages={:?} passes={}",
            router.link(),
            accumulated_links(router.state(), &page(n)),
            settled.passes,
        );
        pages.push(c);
    }

    println!(
        "history entries={} navigations={}",
        router.history_len(),
        router.navigations().len()
    );
}
