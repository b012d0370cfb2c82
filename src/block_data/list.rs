// IMPORTANT: DO NOT EDIT THIS FILE MANUALLY!
// This file is automatically generated with `cargo xtask codegen`.
// To make any changes, edit `data/blocks.json` or the xtask source instead.

multiple_facing! {
    "minecraft:brown_mushroom_block", BrownMushroomBlock;
    "minecraft:chorus_plant", ChorusPlant;
    "minecraft:fire", Fire;
    "minecraft:glass_pane", GlassPane;
    "minecraft:glow_lichen", GlowLichen;
    "minecraft:iron_bars", IronBars;
    "minecraft:mushroom_stem", MushroomStem;
    "minecraft:nether_brick_fence", NetherBrickFence;
    "minecraft:oak_fence", OakFence;
    "minecraft:red_mushroom_block", RedMushroomBlock;
    "minecraft:sculk_vein", SculkVein;
    "minecraft:tripwire", Tripwire;
    "minecraft:vine", Vine;
}
