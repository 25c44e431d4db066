fn main() {
    multiversx_sc_meta_lib::cli_main::<cld_auction::AbiProvider>();
}
