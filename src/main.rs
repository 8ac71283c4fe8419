fn main() -> anyhow::Result<()> {
    pollster::block_on(flycube::run())
}
