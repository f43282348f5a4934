//! # 示例应用程序
//!
//! 演示如何用命令式、构建器与派生宏三种方式登记注入元数据，
//! 并像解析引擎一样把它们读回来。

use clap::Parser;
use di_abstractions::{DecoratorTarget, Injectable, MetadataReader, StorageBucket};
use di_impl::{
    create_tagged_decorator, decorate, decorate_all, global_metadata_store, DecorateSlot,
    TargetMetadataBuilder,
};
use infrastructure_common::{
    init_logging, keys, EngineSettings, Identifier, MetadataEntry, Symbol, TypeInfo,
};
use injection_macros::Injectable;
use std::path::PathBuf;
use tracing::{error, info};

/// 命令行参数
#[derive(Parser, Debug)]
#[command(name = "example-app")]
#[command(about = "元数据标记引擎示例应用")]
struct Args {
    /// 配置文件路径（不指定时读取 config/tagging.* 与 TAGGING__* 环境变量）
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 覆盖配置中的日志级别
    #[arg(long)]
    log_level: Option<String>,
}

pub struct Katana;
pub struct Shuriken;

/// 构造函数参数通过命令式 API 标记
pub struct Ninja;

/// 类标记通过构建器集中登记
pub struct Samurai;

/// 属性通过派生宏标记，启动时自动注册
#[derive(Injectable)]
#[injectable(auto_register)]
#[allow(dead_code)]
pub struct Warrior {
    #[inject(named = "katana")]
    #[inject(tagged(key = "can_throw", value = false))]
    weapon: Katana,
    #[inject(optional)]
    sidearm: Option<Shuriken>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut settings = match &args.config {
        Some(path) => EngineSettings::load_from(path)?,
        None => EngineSettings::load()?,
    };
    if let Some(level) = args.log_level {
        settings.logging.level = level;
    }
    settings.validate()?;
    init_logging(&settings.logging)?;

    info!("启动元数据标记示例应用");

    register_ninja()?;
    register_samurai()?;
    demonstrate_rejections();

    let store = global_metadata_store();
    let mut targets = store.tagged_targets();
    targets.sort_by(|a, b| a.name.cmp(&b.name));
    for target in &targets {
        print_target(target);
    }
    info!(
        "{} 的元数据已在启动时注册",
        Warrior::annotation_target().short_name()
    );

    info!("示例应用结束");
    Ok(())
}

/// 命令式：装饰器按声明的逆序应用
fn register_ninja() -> anyhow::Result<()> {
    let store = global_metadata_store();
    let ninja = DecoratorTarget::constructor_of::<Ninja>();

    let inject_katana =
        create_tagged_decorator(MetadataEntry::new(keys::INJECT_TAG, TypeInfo::of::<Katana>()));
    let named_primary = create_tagged_decorator(MetadataEntry::new(keys::NAMED_TAG, "primary"));
    let multi_weapons = create_tagged_decorator(MetadataEntry::new(
        keys::MULTI_INJECT_TAG,
        Identifier::from(Symbol::new("Weapon")),
    ));

    decorate_all(
        store,
        &[&inject_katana, &named_primary],
        ninja.clone(),
        Some(DecorateSlot::Parameter(0)),
    )?;
    decorate(store, &multi_weapons, ninja, Some(DecorateSlot::Parameter(1)))?;
    Ok(())
}

/// 构建器：一次提交参数与属性标记
fn register_samurai() -> anyhow::Result<()> {
    TargetMetadataBuilder::for_type::<Samurai>()
        .parameter(0, MetadataEntry::new(keys::UNMANAGED_TAG, true))
        .parameter(
            1,
            vec![
                MetadataEntry::new(keys::INJECT_TAG, TypeInfo::of::<Shuriken>()),
                MetadataEntry::new(keys::OPTIONAL_TAG, true),
            ],
        )
        .property("armor", MetadataEntry::new(keys::NAMED_TAG, "heavy"))
        .register(global_metadata_store())?;
    Ok(())
}

/// 演示被拒绝的登记
fn demonstrate_rejections() {
    let store = global_metadata_store();

    let again = create_tagged_decorator(MetadataEntry::new(keys::NAMED_TAG, "secondary"));
    if let Err(e) = decorate(
        store,
        &again,
        DecoratorTarget::constructor_of::<Ninja>(),
        Some(DecorateSlot::Parameter(0)),
    ) {
        error!("重复登记被拒绝: {}", e);
    }

    let on_class = create_tagged_decorator(MetadataEntry::new(keys::NAMED_TAG, "class"));
    if let Err(e) = decorate(store, &on_class, DecoratorTarget::constructor_of::<Samurai>(), None) {
        error!("类本身不能作为属性标记目标: {}", e);
    }
}

fn print_target(target: &TypeInfo) {
    let store = global_metadata_store();

    println!("{}", target.short_name());
    for bucket in [StorageBucket::Parameter, StorageBucket::Property] {
        let mut slots: Vec<_> = store.read_bucket(target, bucket).into_iter().collect();
        slots.sort_by_key(|(slot, _)| slot.to_string());
        for (slot, entries) in slots {
            let rendered: Vec<String> = entries
                .iter()
                .map(|entry| format!("{} = {:?}", entry.key(), entry.value()))
                .collect();
            println!("  [{}] {}: {}", bucket, slot, rendered.join(", "));
        }
    }
}
