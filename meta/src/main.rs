fn main() {
    multiversx_sc_meta_lib::cli_main::<grant_ledger::AbiProvider>();
}
