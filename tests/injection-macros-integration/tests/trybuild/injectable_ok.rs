use di_abstractions::Injectable;
use di_impl::InMemoryMetadataStore;
use injection_macros::Injectable;

pub struct Katana;

#[derive(Injectable)]
#[injectable(auto_register)]
pub struct Ninja {
    #[inject(named = "katana", optional)]
    #[inject(tagged(key = "can_throw", value = false))]
    weapon: Katana,
    level: u32,
}

#[derive(Injectable)]
pub struct Samurai(#[inject(id = "Weapon")] Katana, #[inject(unmanaged)] u32);

fn main() {
    let store = InMemoryMetadataStore::new();
    Ninja::register_metadata(&store).unwrap();
    Samurai::register_metadata(&store).unwrap();
}
