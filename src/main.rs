fn main() -> anyhow::Result<()> {
    laesbarhed_lib::run()
}
