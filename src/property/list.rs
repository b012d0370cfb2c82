// IMPORTANT: DO NOT EDIT THIS FILE MANUALLY!
// This file is automatically generated with `cargo xtask codegen`.
// To make any changes, edit `data/blocks.json` or the xtask source instead.

properties! {
    "minecraft:brown_mushroom_block" => down: bool = true, east: bool = true, north: bool = true, south: bool = true, up: bool = true, west: bool = true;
    "minecraft:chorus_plant" => down: bool = false, east: bool = false, north: bool = false, south: bool = false, up: bool = false, west: bool = false;
    "minecraft:fire" => age: int(0, 15) = 0, east: bool = false, north: bool = false, south: bool = false, up: bool = false, west: bool = false;
    "minecraft:glass_pane" => east: bool = false, north: bool = false, south: bool = false, waterlogged: bool = false, west: bool = false;
    "minecraft:glow_lichen" => down: bool = false, east: bool = false, north: bool = false, south: bool = false, up: bool = false, waterlogged: bool = false, west: bool = false;
    "minecraft:iron_bars" => east: bool = false, north: bool = false, south: bool = false, waterlogged: bool = false, west: bool = false;
    "minecraft:mushroom_stem" => down: bool = true, east: bool = true, north: bool = true, south: bool = true, up: bool = true, west: bool = true;
    "minecraft:nether_brick_fence" => east: bool = false, north: bool = false, south: bool = false, waterlogged: bool = false, west: bool = false;
    "minecraft:oak_fence" => east: bool = false, north: bool = false, south: bool = false, waterlogged: bool = false, west: bool = false;
    "minecraft:red_mushroom_block" => down: bool = true, east: bool = true, north: bool = true, south: bool = true, up: bool = true, west: bool = true;
    "minecraft:sculk_vein" => down: bool = false, east: bool = false, north: bool = false, south: bool = false, up: bool = false, waterlogged: bool = false, west: bool = false;
    "minecraft:tripwire" => attached: bool = false, disarmed: bool = false, east: bool = false, north: bool = false, powered: bool = false, south: bool = false, west: bool = false;
    "minecraft:vine" => east: bool = false, north: bool = false, south: bool = false, up: bool = false, west: bool = false;
    "minecraft:redstone_lamp" => lit: bool = false;
}
