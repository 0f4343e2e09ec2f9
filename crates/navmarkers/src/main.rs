mod app;

fn main() -> miette::Result<()> {
    app::start_navmarkers()
}
