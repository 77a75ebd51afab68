use crate::{
    args,
    search,
};

/// Build an example search config for a method, in the requested format.
/// Without a method name, lists the available methods instead.
pub fn example_config(method_name: Option<&str>, cfg_format: args::CfgFormat) -> args::ProcResult<String> {
    let available_methods_str = format!("Available methods:\n{}", search::methods::available_methods_str());
    let Some(method_name) = method_name else {
        return Ok(available_methods_str);
    };

    let search_cfg = search::SearchCfg{
        method: search::MethodEnum::from_name(method_name)?,
        output_path: Some("OPTIONAL/PATH/TO/OUTPUT/FILE".to_string()),
        ..search::SearchCfg::default()
    };

    let cfg_str = match cfg_format {
        args::CfgFormat::Yaml => serde_yaml::to_string(&search_cfg)?,
        args::CfgFormat::Json => serde_json::to_string_pretty(&search_cfg)? + "\n",
        args::CfgFormat::Toml => toml::to_string_pretty(&search_cfg)?,
    };
    Ok(cfg_str)
}
