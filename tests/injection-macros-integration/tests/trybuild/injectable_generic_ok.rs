use di_abstractions::Injectable;
use di_impl::InMemoryMetadataStore;
use injection_macros::Injectable;

#[derive(Injectable)]
pub struct Holder<T> {
    #[inject(multi = "Plugin")]
    plugins: Vec<T>,
}

fn main() {
    let store = InMemoryMetadataStore::new();
    Holder::<String>::register_metadata(&store).unwrap();
}
