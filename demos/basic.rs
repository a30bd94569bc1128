use json_filestore::JsonFile;
use serde_json::json;

fn main() -> Result<(), json_filestore::Error> {
    // RUST_LOG=info shows the diagnostic channel (missing keys, no-ops, ...)
    env_logger::init();

    let path = std::env::temp_dir().join("json_filestore_example_basic.json");
    let store = JsonFile::new(&path);

    // create a fresh document and seed it
    store.create_with(vec![
        ("apples".to_string(), json!(3)),
        ("bananas".to_string(), json!(5)),
    ])?;

    // upsert: overwrite one key, add another
    store.upsert(vec![
        ("apples".to_string(), json!(4)),
        ("oranges".to_string(), json!(0)),
    ])?;

    // point lookups
    println!("apples  = {:?}", store.read_by_key("apples"));
    println!("missing = {:?}", store.read_by_key("missing"));

    // reverse lookup by value
    println!("worth 0 = {:?}", store.read_keys_by_value(&json!(0)));

    // full scan
    for (key, value) in store.read_all() {
        println!("{key} = {value}");
    }

    // remove a couple of keys, then everything
    let removed = store.remove_keys(["bananas", "ghost"])?;
    println!("removed = {removed:?}");
    let cleared = store.remove_all_keys()?;
    println!("cleared = {cleared:?}");

    // and finally the file itself
    store.remove()?;
    Ok(())
}
