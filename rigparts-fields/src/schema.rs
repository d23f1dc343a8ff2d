//! The schema registry: one ordered field list per category.
//!
//! Pure and total over the category enum — there is no error case and no
//! lookup that can miss. Both the validator and any form renderer drive off
//! the same list, so a field can never be validated and displayed
//! inconsistently.

use crate::category::Category;
use crate::types::FieldSpec;

/// The five fields shared by every category, appended after the
/// category-specific fields. `image` and `description` are optional.
fn common_fields() -> Vec<FieldSpec> {
    vec![
        FieldSpec::text("name", "Name").required(),
        FieldSpec::text("brand", "Brand").required(),
        FieldSpec::number("price", "Price").required(),
        FieldSpec::url("image", "Image URL"),
        FieldSpec::textarea("description", "Description"),
    ]
}

fn specific_fields(category: Category) -> Vec<FieldSpec> {
    match category {
        Category::Cpus => vec![
            FieldSpec::text("socket", "Socket").required(),
            FieldSpec::integer("cores", "Cores").required(),
            FieldSpec::integer("threads", "Threads").required(),
            FieldSpec::text("base_clock", "Base Clock").required(),
            FieldSpec::text("boost_clock", "Boost Clock").required(),
            FieldSpec::text("tdp", "TDP").required(),
        ],
        Category::GraphicsCards => vec![
            FieldSpec::text("memory", "Memory").required(),
            FieldSpec::text("core_clock", "Core Clock").required(),
            FieldSpec::text("boost_clock", "Boost Clock").required(),
            FieldSpec::text("tdp", "TDP").required(),
        ],
        Category::Motherboards => vec![
            FieldSpec::text("socket", "Socket").required(),
            FieldSpec::text("chipset", "Chipset").required(),
            FieldSpec::select(
                "form_factor",
                "Form Factor",
                ["ATX", "Micro-ATX", "Mini-ITX", "E-ATX"],
            )
            .required(),
            FieldSpec::text("max_memory", "Max Memory").required(),
            FieldSpec::integer("memory_slots", "Memory Slots").required(),
        ],
        Category::Ram => vec![
            FieldSpec::text("capacity", "Capacity").required(),
            FieldSpec::select("type", "Type", ["DDR4", "DDR5"]).required(),
            FieldSpec::text("speed", "Speed").required(),
            FieldSpec::text("cas_latency", "CAS Latency"),
        ],
        Category::Storage => vec![
            FieldSpec::text("capacity", "Capacity").required(),
            FieldSpec::select("type", "Type", ["SSD", "HDD", "NVMe"]).required(),
            FieldSpec::text("interface", "Interface").required(),
            FieldSpec::text("read_speed", "Read Speed"),
            FieldSpec::text("write_speed", "Write Speed"),
            FieldSpec::text("cache_size", "Cache Size"),
            FieldSpec::integer("rpm", "RPM"),
        ],
        Category::PowerSupplies => vec![
            FieldSpec::text("wattage", "Wattage").required(),
            FieldSpec::select(
                "efficiency",
                "Efficiency",
                [
                    "80+",
                    "80+ Bronze",
                    "80+ Silver",
                    "80+ Gold",
                    "80+ Platinum",
                    "80+ Titanium",
                ],
            )
            .required(),
            FieldSpec::select(
                "modular",
                "Modular",
                ["Fully Modular", "Semi-Modular", "Non-Modular"],
            )
            .required(),
        ],
        Category::Cooling => vec![
            FieldSpec::select("type", "Type", ["Air Cooler", "AIO Liquid", "Custom Loop"])
                .required(),
            FieldSpec::text("radiator_size", "Radiator Size"),
            FieldSpec::text("fan_size", "Fan Size"),
            FieldSpec::text("height", "Height"),
        ],
        Category::Cases => vec![
            FieldSpec::select(
                "form_factor",
                "Form Factor",
                ["Full Tower", "Mid Tower", "Mini Tower", "Mini ITX"],
            )
            .required(),
            FieldSpec::text("motherboard_support", "Motherboard Support").required(),
            FieldSpec::text("dimensions", "Dimensions"),
        ],
    }
}

/// The complete ordered field list for a category: the category-specific
/// fields followed by the common fields.
pub fn fields_for(category: Category) -> Vec<FieldSpec> {
    let mut fields = specific_fields(category);
    fields.extend(common_fields());
    fields
}
