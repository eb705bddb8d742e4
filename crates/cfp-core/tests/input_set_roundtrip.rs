use cfp_core::config::ModelConfig;
use cfp_core::domain::{CfpErrorCategory, CfpPackage};
use cfp_core::modules::{
    ConduitNetwork, NameFileUnits, NetworkFiles, OutputControl, PackageBuilder, RechargeRouting,
    build_packages, read_default_node_budget, update_name_file, write_input_files,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("parent directory should be created");
    }
    fs::write(path, content).expect("file should be written");
}

fn seed_tables(dir: &Path) -> NetworkFiles {
    write_file(
        &dir.join("tables/network.txt"),
        "1 10 10 1 2 0 0 0 0 0 1 0 0 0 0 0\n2 11 10 1 1 0 0 0 0 0 1 0 0 0 0 0\n",
    );
    write_file(&dir.join("tables/geoheight.txt"), "1 95.0\n2 94.5\n");
    write_file(&dir.join("tables/pipes.txt"), "1 0.3 1.2 0.001 2000 4000\n");
    write_file(&dir.join("tables/heads.txt"), "1 -1\n2 100.0\n");
    write_file(&dir.join("tables/kexch.txt"), "1 5.0e-4\n2 5.0e-4\n");

    NetworkFiles {
        network_info: "tables/network.txt".into(),
        geoheight: "tables/geoheight.txt".into(),
        pipe_info: "tables/pipes.txt".into(),
        node_head: "tables/heads.txt".into(),
        wall_permeability: "tables/kexch.txt".into(),
    }
    .resolve_against(dir)
}

#[test]
fn written_files_read_back_as_block_lines() {
    let temp = TempDir::new().expect("tempdir should be created");
    let files = seed_tables(temp.path());
    let model = temp.path().join("karst").to_string_lossy().into_owned();

    let coc = OutputControl::new(2, vec![1, 2], 10, 1, vec![1]);
    let crch = RechargeRouting::new(vec![1, 2], vec![1, 2], vec![1, -1], vec![0.4, 0.6]);
    let cfp = ConduitNetwork::new(2, 1, 1, files);
    let builders: [&dyn PackageBuilder; 3] = [&coc, &crch, &cfp];
    let blocks = build_packages(&builders).expect("blocks should build");

    let written = write_input_files(&model, &blocks).expect("files should be written");
    assert_eq!(written.len(), 3);

    for (path, block) in written.iter().zip(&blocks) {
        let expected: String = block.iter().map(|line| format!("{line}\n")).collect();
        let actual = fs::read_to_string(path).expect("written file should be readable");
        assert_eq!(actual, expected, "{} content mismatch", block.package());
    }

    let crch_text = fs::read_to_string(format!("{model}.crch")).expect("crch readable");
    assert_eq!(
        crch_text,
        "IFLAG_RCH for stress period 1\n1\n1 0.4\n2 0.6\nIFLAG_RCH for stress period 2\n-1\n"
    );

    let cfp_text = fs::read_to_string(format!("{model}.cfp")).expect("cfp readable");
    assert!(cfp_text.contains("#temperature\n25.0\n"));
    assert!(cfp_text.contains("1 95.0\n2 94.5\n"));
    assert!(cfp_text.ends_with("2 5.0e-4\n\n"));
}

#[test]
fn config_driven_run_writes_and_registers_packages() {
    let temp = TempDir::new().expect("tempdir should be created");
    seed_tables(temp.path());
    let model = temp.path().join("run/karst").to_string_lossy().into_owned();
    fs::create_dir_all(temp.path().join("run")).expect("run dir");
    write_file(&temp.path().join("run/karst.nam"), "LIST               2  karst.list\n");

    let config_json = serde_json::json!({
        "model_name": model,
        "output_control": {
            "nnodes": 1, "node_numbers": [2], "node_interval": 1,
            "npipes": 1, "pipe_numbers": [1], "pipe_interval": 2
        },
        "recharge": {
            "node_numbers": [1, 2], "stress_periods": [1], "flags": [1], "fractions": [0.0, 1.0]
        },
        "network": {
            "nnodes": 2, "npipes": 1, "nlayers": 1,
            "files": {
                "network_info": "tables/network.txt",
                "geoheight": "tables/geoheight.txt",
                "pipe_info": "tables/pipes.txt",
                "node_head": "tables/heads.txt",
                "wall_permeability": "tables/kexch.txt"
            }
        },
        "units": { "coc": 31 }
    });
    let config_path = temp.path().join("model.json");
    write_file(&config_path, &config_json.to_string());

    let config = ModelConfig::from_path(&config_path).expect("config should load");
    let written = config.write_inputs().expect("inputs should be written");
    assert_eq!(written.len(), 3);
    update_name_file(&config.model_name, &config.units).expect("name file should update");

    let coc_text = fs::read_to_string(format!("{model}.coc")).expect("coc readable");
    assert_eq!(coc_text.lines().count(), 13);
    assert!(coc_text.ends_with("#Output each n time steps\n2\n"));

    let nam = fs::read_to_string(format!("{model}.nam")).expect("nam readable");
    let lines: Vec<&str> = nam.lines().collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("COC               31  "));
    assert!(lines[2].starts_with("CRCH              18  "));
    assert!(lines[3].starts_with("CFP               17  "));
}

#[test]
fn missing_table_stops_the_run_before_any_file_is_written() {
    let temp = TempDir::new().expect("tempdir should be created");
    let mut files = seed_tables(temp.path());
    files.node_head = temp.path().join("tables/missing.txt");
    let model = temp.path().join("karst").to_string_lossy().into_owned();

    let coc = OutputControl::new(1, vec![1], 1, 1, vec![1]);
    let crch = RechargeRouting::new(vec![1], vec![1], vec![1], vec![1.0]);
    let cfp = ConduitNetwork::new(2, 1, 1, files);
    let builders: [&dyn PackageBuilder; 3] = [&coc, &crch, &cfp];

    let error = build_packages(&builders).expect_err("missing table should fail");
    assert_eq!(error.category(), CfpErrorCategory::IoSystemError);
    assert!(!Path::new(&format!("{model}.coc")).exists());
    assert_eq!(cfp.package(), CfpPackage::Cfp);
}

#[test]
fn budget_reader_uses_model_list_file() {
    let temp = TempDir::new().expect("tempdir should be created");
    let model = temp.path().join("karst").to_string_lossy().into_owned();

    let mut list = String::from(" MODFLOW-2005 CFP\n\n");
    for (time, flow) in [("10.0", "-1.25"), ("20.0", "-2.50"), ("30.0", "-3.75")] {
        list.push_str("                    NODE WATER BUDGET\n");
        list.push('\n');
        list.push_str(&format!("{:<24}{:>6}\n", " TOTAL TIME", time));
        list.push_str(" -----\n NODE  FLOW\n -----\n -----\n");
        list.push_str(&format!("{:>7}{:>10}\n", 1, "0.0"));
        list.push_str(&format!("{:>7}{:>10}\n", 2, flow));
    }
    write_file(Path::new(&format!("{model}.list")), &list);

    let budget = read_default_node_budget(&model, 2).expect("budget should be read");
    assert_eq!(budget.len(), 3);
    assert_eq!(budget.times, [10.0, 20.0, 30.0]);
    assert_eq!(budget.flows, [-1.25, -2.5, -3.75]);

    let missing = read_default_node_budget(&format!("{model}-absent"), 2)
        .expect_err("missing list file should fail");
    assert_eq!(missing.category(), CfpErrorCategory::IoSystemError);
}

#[test]
fn name_file_units_default_to_simulator_conventions() {
    let units = NameFileUnits::default();
    assert_eq!((units.coc, units.crch, units.cfp), (16, 18, 17));
}
