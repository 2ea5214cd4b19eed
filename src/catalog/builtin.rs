//! Art for [`crate::Catalog::builtin`].
//!
//! Fragment coordinates are in the head frame (head centered on x = 105) except the body, which
//! sits in the torso frame (centered on x = 0, belt at y ≈ 260).

pub(crate) const WIDTH: u32 = 400;
pub(crate) const HEIGHT: u32 = 560;

pub(crate) const BASE_STYLE: &str = r#"
.limb { fill: none; stroke: #1b5e20; stroke-width: 20px; stroke-linecap: round; }
.limb.arm { stroke: #c62828; }
.skin { fill: #f6c8a4; }
.white { fill: #ffffff; }
.high1 { fill: #3e2723; }
.high2 { fill: #f9a825; }
.suit .body { fill: #c62828; }
.eye { fill: #263238; }
.mouth { fill: none; stroke: #8d3b2f; stroke-width: 4px; stroke-linecap: round; }
.cheek { fill: #ef9a9a; }
.hats .hat-main { fill: #2e7d32; }
.hats .hat-trim { fill: #ffffff; }
.hats .hat-pom { fill: #ffffff; }
.hair .hair-main { fill: #6d4c41; }
.glasses .frame { fill: none; stroke: #37474f; stroke-width: 4px; }
.glasses .lens { fill: #263238; }
"#;

pub(crate) const BODY: &str =
    r#"<path class="body" d="M-42.66,281.08V226A42.66,36,0,0,1,42.66,226V281.08Z"/>"#;

pub(crate) const HEAD: &str = r#"<circle class="skin" cx="105" cy="150" r="68"/>
<g class="blink"><ellipse class="eye" cx="80" cy="150" rx="7" ry="10"/><ellipse class="eye" cx="130" cy="150" rx="7" ry="10"/></g>
<circle class="cheek" cx="66" cy="174" r="9"/><circle class="cheek" cx="144" cy="174" r="9"/>
<path class="mouth" d="M88,182q17,14,34,0"/>"#;

pub(crate) const BODY_TYPES: &[(&str, f64, f64)] = &[
    ("standard", 0.5, 0.25),
    ("tall", 1.0, 0.25),
    ("short", 0.0, 0.5),
    ("round", 0.3, 1.0),
    ("lanky", 1.0, 0.0),
];

pub(crate) const HATS: &[(&str, &str)] = &[
    ("none", ""),
    (
        "pointy",
        r#"<path class="hat-main" d="M35,112Q105,-10,190,20Q150,60,175,112Z"/><rect class="hat-trim" x="30" y="100" width="150" height="24" rx="12"/><circle class="hat-pom" cx="192" cy="22" r="14"/>"#,
    ),
    (
        "beanie",
        r#"<path class="hat-main" d="M37,120a68,68,0,0,1,136,0Z"/><rect class="hat-trim" x="32" y="108" width="146" height="22" rx="11"/>"#,
    ),
];

pub(crate) const HAIR: &[(&str, &str)] = &[
    ("none", ""),
    (
        "fringe",
        r#"<path class="hair-main" d="M40,140C40,90,80,78,105,78s65,12,65,62c-20-14-40-22-65-22s-45,8-65,22Z"/>"#,
    ),
    (
        "bob",
        r#"<path class="hair-main" d="M35,190V140C35,96,70,76,105,76s70,20,70,64v50h-18v-48c-14-10-32-16-52-16s-38,6-52,16v48Z"/>"#,
    ),
];

pub(crate) const GLASSES: &[(&str, &str)] = &[
    ("none", ""),
    (
        "round",
        r#"<g class="frame"><circle cx="80" cy="150" r="17"/><circle cx="130" cy="150" r="17"/><path d="M97,150h16"/></g>"#,
    ),
    (
        "shades",
        r#"<path class="lens" d="M58,140h44v12a14,14,0,0,1-14,14h-16a14,14,0,0,1-14-14Zm50,0h44v12a14,14,0,0,1-14,14h-16a14,14,0,0,1-14-14Z"/><path class="frame" d="M102,144h6"/>"#,
    ),
];

pub(crate) const EARS: &[(&str, &str)] = &[
    ("none", ""),
    (
        "pointy",
        r#"<path class="skin" d="M40,140L2,112L42,168Z"/><path class="skin" d="M170,140L208,112L168,168Z"/>"#,
    ),
    (
        "round",
        r#"<circle class="skin" cx="38" cy="150" r="14"/><circle class="skin" cx="172" cy="150" r="14"/>"#,
    ),
];

pub(crate) const ACCESSORIES: &[(&str, &str)] = &[
    ("none", ""),
    (
        "scarf",
        r#"<path class="high2" d="M60,210h90v18h-90Z"/><path class="high2" d="M120,220h18v46h-18Z"/>"#,
    ),
    ("bell", r#"<circle class="high2" cx="105" cy="222" r="10"/>"#),
];

/// 720x960 two-band backdrops; big enough that the default export crop never letterboxes.
pub(crate) const BACKGROUNDS: &[(&str, &str)] = &[
    (
        "snow",
        "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAtAAAAPACAIAAACTlNnkAAAQiElEQVR42u3W1XJk5wFG0f\
         PYYYcdO8zgxLHDGWZm0DCzRtBqQavFDFO5SL+BdHG+rlN/r6r1BPtqV185MAIAEFVJAAAYDgDAcAAA7DkcXz0wAgAQZT\
         gAgD4Mx8ERAIAowwEAGA4AwHAAABgOAKABw/G1gyMAAFG94RgFAIgyHACA4QAADAcAgOEAAJowHIdGAQCiqq8fGgUAiD\
         IcAIDhAAAMBwCA4QAADAcAYDgAAGoYjm8cGgUAiDIcAEAfhuPwKABAlOEAAAwHAGA4AAAMBwDQgOH45uFRAIAowwEAGA\
         4AoIjhGAMAiDIcAIDhAABKGI4jYwAAUdW3jowBAEQZDgDAcAAAhgMAwHAAAIYDADAcAAA1DMdHR8YAAKIMBwBgOACAEo\
         bj6BgAQJThAAAMBwBgOAAA9h6Obx8dAwCIMhwAgOEAAAwHAIDhAAAMBwAwGMMxDgAQVX3n2DgAQJThAAAMBwBgOAAADA\
         cAYDgAAMMBAFDDcHz32DgAQJThAAAMBwBgOAAA9jEcx8cBAKIMBwBgOACAAobje8fHAQCiDAcAYDgAAMMBAGA4AADDAQ\
         AYDgCAGobj+yfGAQCiesPRAgCIMhwAgOEAAAwHAIDhAAAMBwAwCMPxgxMtAIAowwEAGA4AwHAAAOxjOE62AACiDAcAYD\
         gAgAKG44cnWwAAUYYDADAcAIDhAAAwHACA4QAADAcAQA3D8fHJFgBAVPXxqRYAQJThAAAMBwBQxHBMAABEGQ4AwHAAAA\
         UMx49OTQAARBkOAMBwAACGAwDAcAAATRiO0xMAAFGGAwDID8cnpycAAKIMBwBgOAAAwwEAYDgAAMMBABgOAIAahuPT0x\
         MAAFHVp2cmAACiDAcAYDgAAMMBAGA4AIBGDEcbACCq+vGZNgBAlOEAAAwHAGA4AAAMBwDQhOE42wYAiDIcAEB+OH5ytg\
         0AEGU4AADDAQAYDgAAwwEAGA4AwHAAANQwHD892wYAiDIcAEAfhuNcGwAgynAAAIYDADAcAACGAwBowHD87FwbACCqNx\
         yTAABRhgMAMBwAgOEAADAcAEAThuP8JABAVPXz85MAAFGGAwAwHACA4QAAMBwAgOEAAAwHAEANw/GL85MAAFGGAwDow3\
         BcmAQAiDIcAIDhAAAMBwCA4QAAGjAcv7wwCQAQZTgAAMMBABQxHFMAAFGGAwAwHABACcNxcQoAIKr61cUpAIAowwEAGA\
         4AwHAAABgOAMBwAACGAwCghuH49cUpAIAowwEAGA4AoIThuDQFABBlOAAAwwEAGA4AgL2H4zeXpgAAogwHAGA4AADDAQ\
         BgOAAAwwEADMZwTAMARFW/vTwNABBlOAAAwwEAGA4AAMMBABgOAMBwAADUMBy/uzwNABBlOAAAwwEAlDAcV6YBAKIMBw\
         BgOAAAwwEAsPdw/P7KNABAlOEAAAwHAGA4AAAMBwBgOAAAwwEAUMNw/OHqNABAVG84ZgAAogwHAGA4AADDAQBgOAAAww\
         EADMJw/PHqDABAlOEAAAwHAGA4AAD2MRzXZgAAogwHAGA4AIAChuNP12YAAKIMBwBgOAAAwwEAYDgAAMMBABgOAIAahu\
         OzazMAAFHVZ9dnAACiDAcAYDgAgCKGowMAEGU4AADDAQAUMBx/vt4BAIgyHACA4QAADAcAgOEAAJowHDc6AABRhgMAyA\
         /HX250AACiDAcAYDgAAMMBAGA4AADDAQAYDgCAGobj8xsdAICo6vObHQCAKMMBABgOAMBwAAAYDgCgEcMxCwAQVf315i\
         wAQJThAAAMBwBgOAAADAcA0IThuDULABBlOACA/HB8cWsWACDKcAAAhgMAMBwAAIYDADAcAIDhAACoYTi+vDULABBlOA\
         CAPgzH7VkAgCjDAQAYDgDAcAAAGA4AoAHD8bfbswAAUb3h6AIARBkOAMBwAACGAwDAcAAATRiOoS4AQFT196EuAECU4Q\
         AADAcAYDgAAAwHAGA4AADDAQBQw3D8Y6gLABBlOACAPgzHnS4AQJThAAAMBwBgOAAADAcA0IDh+OedLgBAlOEAAAwHAF\
         DEcMwBAEQZDgDAcAAAJQzH3TkAgKjqX3fnAACiDAcAYDgAAMMBAGA4AADDAQAYDgCAGobj33fnAACiDAcAYDgAgBKG49\
         4cAECU4QAADAcAYDgAAPYejv/cmwMAiDIcAIDhAAAMBwCA4QAADAcAMBjDMQ8AEFX99/48AECU4QAADAcAYDgAAAwHAG\
         A4AADDAQBQw3AcuD8PABBlOAAAwwEAGA4AgH0Mx4N5AIAowwEAGA4AoIDhOPhgHgAgynAAAIYDADAcAACGAwAwHACA4Q\
         AAqGE4Dj2cBwCI6g3HAgBAlOEAAAwHAGA4AAAMBwBgOACAQRiOww8XAACiDAcAYDgAAMMBALCP4Xi0AAAQZTgAAMMBAB\
         QwHEceLQAARBkOAMBwAACGAwDAcAAAhgMAMBwAADUMx9FHCwAAUdXRxwsAAFGGAwAwHABAEcOxCAAQZTgAAMMBABQwHM\
         ceLwIARBkOAMBwAACGAwDAcAAATRiOJ4sAAFGGAwDID8fxJ4sAAFGGAwAwHACA4QAAMBwAgOEAAAwHAEANw3HiySIAQF\
         R14ukiAECU4QAADAcAYDgAAAwHANCI4VgCAIiqTj5dAgCIMhwAgOEAAAwHAIDhAACaMBzPlgAAogwHAJAfjlPPlgAAog\
         wHAGA4AADDAQBgOAAAwwEAGA4AgBqG4/SzJQCAKMMBAPRhOJ4vAQBEGQ4AwHAAAIYDAMBwAAANGI4zz5cAAKJ6w7EMAB\
         BlOAAAwwEAGA4AAMMBADRhOF4sAwBEVWdfLAMARBkOAMBwAACGAwDAcAAAhgMAMBwAADUMx7kXywAAUYYDAOjDcLxcBg\
         CIMhwAgOEAAAwHAIDhAAAaMBznXy4DAEQZDgDAcAAARQzHCgBAlOEAAAwHAFDCcLxaAQCIqi68WgEAiDIcAIDhAAAMBw\
         CA4QAADAcAYDgAAGoYjouvVgAAogwHAGA4AIAShuP1CgBAlOEAAAwHAGA4AAD2Ho5Lr1cAAKIMBwBgOAAAwwEAYDgAAM\
         MBAAzGcKwCAERVl9+sAgBEGQ4AwHAAAIYDAMBwAACGAwAwHAAANQzHlTerAABRhgMAMBwAQAnD8XYVACDKcAAAhgMAMB\
         wAAHsPx9W3qwAAUYYDADAcAIDhAAAwHACA4QAADAcAQA3Dce3dKgBAVG841gAAogwHAGA4AADDAQBgOAAAwwEADMJwXH\
         +3BgAQZTgAAMMBABgOAIB9DMfwGgBAlOEAAAwHAFDAcNwYXgMAiDIcAIDhAAAMBwCA4QAADAcAYDgAAGoYjpvDawAAUd\
         XN92sAAFGGAwAwHABAEcOxDgAQZTgAAMMBABQwHLferwMARBkOAMBwAACGAwDAcAAATRiOkXUAgCjDAQDkh+P2yDoAQJ\
         ThAAAMBwBgOAAADAcAYDgAAMMBAFDDcAyNrAMARFVDo+sAAFGGAwAwHACA4QAAMBwAQCOGYwMAIKq6M7oBABBlOAAAww\
         EAGA4AAMMBADRhOMY2AACiDAcAkB+Ou2MbAABRhgMAMBwAgOEAADAcAIDhAAAMBwBADcNxb2wDACDKcAAAfRiO8Q0AgC\
         jDAQAYDgDAcAAAGA4AoAHDcX98AwAgqjccmwAAUYYDADAcAIDhAAAwHABAE4ajtQkAEFU9aG0CAEQZDgDAcAAAhgMAwH\
         AAAIYDADAcAAA1DMfD1iYAQJThAAD6MBwTmwAAUYYDADAcAIDhAAAwHABAA4bj0cQmAECU4QAADAcAUMRwbAEARBkOAM\
         BwAAAlDEd7CwAgqnrc3gIAiDIcAIDhAAAMBwCA4QAADAcAYDgAAGoYjiftLQCAKMMBABgOAKCE4ZjcAgCIMhwAgOEAAA\
         wHAMDew/F0cgsAIMpwAACGAwAwHAAAhgMAMBwAwGAMxzYAQFT1bGobACDKcAAAhgMAMBwAAIYDADAcAIDhAACoYTieT2\
         0DAEQZDgDAcAAAhgMAYB/DMb0NABBlOAAAwwEAFDAcL6a3AQCiDAcAYDgAAMMBAGA4AADDAQAYDgCAGobj5cw2AEBUbz\
         h2AACiDAcAYDgAAMMBAGA4AADDAQAMwnC8mtkBAIgyHACA4QAADAcAwD6Go7MDABBlOAAAwwEAFDAcrzs7AABRhgMAMB\
         wAgOEAADAcAIDhAAAMBwBADcPxprMDABBVvZndAQCIMhwAgOEAAIoYjl0AgCjDAQAYDgCggOF4O7sLABBlOAAAwwEAGA\
         4AAMMBADRhOLq7AABRhgMAyA/Hu+4uAECU4QAADAcAYDgAAAwHAGA4AADDAQBQw3AMd3cBAKKq4bldAIAowwEAGA4AwH\
         AAABgOAKARw/EBACCqej/3AQAgynAAAIYDADAcAACGAwBownDMfwAAiDIcAEB+OEbmPwAARBkOAMBwAAAFDMfmzv8AAK\
         IMBwBgOAAAwwEAYDgAAMMBABgOAADDAQAYDgAAwwEAGA4AwHAAABgOAMBwAACGAwDAcAAAhgMAwHAAAIYDADAcAACGAw\
         AwHACA4QAAMBwAgOEAADAcAIDhAAAMBwCA4QAADAcAYDgAAAwHAGA4AAAMBwBgOAAAwwEAYDgAAMMBABgOAADDAQAYDg\
         AAwwEAGA4AwHAAABgOAMBwAACGAwDAcAAAhgMAwHAAAIYDADAcAACGAwAwHACA4QAAMBwAgOEAADAcAIDhAAAMBwCA4Q\
         AADAcAYDgAAAwHAGA4AAAMBwBgOAAAwwEAYDgAAMMBABgOAADDAQAYDgAAwwEAGA4AwHAAABgOAMBwAACGAwDAcAAAhg\
         MAwHAAAIYDADAcAACGAwAwHACA4QAAMBwAgOEAADAcAIDhAAAMBwCA4QAADAcAYDgAAAwHAGA4AAAMBwBgOAAAwwEAYD\
         gAAMMBABgOAADDAQAYDgAAwwEAGA4AwHAAABgOAMBwAACGAwDAcAAAhgMAwHAAAIYDADAcAACGAwAwHACA4VABADAcAI\
         DhAAAwHACA4QAADAcAgOEAAAwHAGA4JAAADAcAYDgAAAwHAGA4AADDAQBgOAAAwwEAYDgAAMMBABgOAADDAQAYDgDAcA\
         AAGA4AwHAAABgOAMBwAACGAwDAcAAAhgMAMBwAAIYDADAcAACGAwAwHACA4QAAMBwAgOEAAAwHAIDhAAAMBwCA4QAADA\
         cAYDgAAAwHAGA4AADDAQBgOAAAwwEAYDgAAMMBABgOAADDAQAYDgDAcAAAGA4AwHAAABgOAMBwAACGAwDAcAAAhgMAMB\
         wAAIYDADAcAACGAwAwHACA4QAAMBwAgOEAAAwHAIDhAAAMBwCA4QAADAcAYDgAAAwHAGA4AADDAQBgOAAAwwEAYDgAAM\
         MBABgOAADDAQAYDgDAcAAAGA4AwHAAABgOAMBwAACGAwDAcAAAhgMAMBwAAIYDADAcAACGAwAwHACA4QAAMBwAgOEAAA\
         wHAIDhAAAMBwCA4QAADAcAYDgAAAwHAGA4AADDAQBgOAAAwwEAYDgAAMMBABgOAADDAQAYDgDAcAAAGA4AwHAAABgOAM\
         BwAACGAwDAcAAAhgMAMBwAAIYDADAcAACGAwAwHACA4QAAMBwAgOEAAAyHCgCA4QAADAcAgOEAAAwHAGA4AAAMBwBgOA\
         AADAcAEPd/Y4B3sXnn6kgAAAAASUVORK5CYII=",
    ),
    (
        "forest",
        "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAtAAAAPACAIAAACTlNnkAAAQbklEQVR42u3W51aVZwKG4e\
         8gFBGRxMRERU3vsffeK4qiKIqiKIqamWR6TaamTJ/0fpR59QT2/rEf8rHea63rCO5fd7NyZB0AQFQjAQBgOAAAwwEAYD\
         gAgB9/OFadWQcAEFWGYz0AQJThAAAMBwBgOAAADAcAYDgAgBqGY/jsegCAKMMBABgOAMBwAAB0MxwbAACiDAcAYDgAAM\
         MBAGA4AIAWDMfq0Q0AAFGGAwAwHACA4QAAMBwAgOEAAOoYjo0AAFHNmnMbAQCiDAcAYDgAAMMBAGA4AADDAQAYDgAAww\
         EAGA4AgDIca89vBACIKsOxCQAgynAAAIYDADAcAACGAwAwHABADcPxzNgmAIAowwEAGA4AwHAAABgOAKAVw7EZACDKcA\
         AAhgMAMBwAAJ2H49kLmwEAogwHAGA4AADDAQBgOAAAwwEA1DEcWwAAoprnLm4BAIgyHACA4QAADAcAgOEAAAwHAGA4AA\
         AMBwBgOAAAynA8P74FACCqDMdWAIAowwEAGA4AwHAAABgOAMBwAAA1DMcLl7YCAEQZDgDAcAAAhgMAoJvh2AYAEGU4AA\
         DDAQAYDgAAwwEAtGA4Xry8DQAgynAAAIYDADAcAACGAwAwHABAHcOxHQAgqnlpYjsAQJThAAAMBwBgOAAADAcAYDgAAM\
         MBAGA4AADDAQBQhuPlK9sBAKLKcOwAAIgyHACA4QAADAcAgOEAAAwHAFDDcLxydQcAQJThAAAMBwBgOAAADAcA0Irh2A\
         kAEGU4AADDAQAYDgCAzsPx6uROAIAowwEAGA4AwHAAABgOAMBwAAB1DMcuAICo5rVruwAAogwHAGA4AADDAQBgOAAAww\
         EAGA4AAMMBABgOAIAyHK9f3wUAEFWGYzcAQJThAAAMBwBgOAAADAcAYDgAgBqG442p3QAAUYYDADAcAIDhAADoZjj2AA\
         BEGQ4AwHAAAIYDAMBwAAAtGI43b+wBAIgyHACA4QAADAcAgOEAAAwHAFDHcOwFAIhq1t3cCwAQZTgAAMMBABgOAADDAQ\
         AYDgDAcAAAGA4AwHAAAJThWD+9FwAgqgzHPgCAKMMBABgOAMBwAAAYDgDAcAAANQzHhlv7AACiDAcAYDgAAMMBAGA4AI\
         BWDMd+AIAowwEAGA4AwHAAAHQejo239wMARBkOAMBwAACGAwDAcAAAhgMAqGM4DgAARDWbZg4AAEQZDgDAcAAAhgMAwH\
         AAAIYDADAcAACGAwAwHAAAZTg23zkAABBVhuMgAECU4QAADAcAYDgAAAwHAGA4AIAahmPL3YMAAFGGAwAwHACA4QAA6G\
         Y4DgEARBkOAMBwAACGAwDAcAAALRiOrbOHAACiDAcAYDgAAMMBAGA4AADDAQDUMRyHAQCimm33DgMARBkOAMBwAACGAw\
         DAcAAAhgMAMBwAAIYDADAcAABlOLbfPwwAEFWG4wgAQJThAAAMBwBgOAAADAcAYDgAgBqGY8eDIwAAUYYDADAcAIDhAA\
         AwHABAK4bjKABAlOEAAAwHAGA4AAA6D8fOt44CAEQZDgDAcAAAhgMAwHAAAIYDAKhjOI4BAEQ1u35yDAAgynAAAIYDAD\
         AcAACGAwAwHACA4QAAMBwAgOEAACjDsfunxwAAospwHAcAiDIcAIDhAAAMBwCA4QAADAcAUMNw7Hn7OABAlOEAAAwHAG\
         A4AAC6GY4TAABRhgMAMBwAgOEAADAcAEALhmPvOycAAKIMBwBgOAAAwwEAYDgAAMMBANQxHCcBAKKafT87CQAQZTgAAM\
         MBABgOAADDAQAYDgDAcAAAGA4AwHAAAJTh2P/zkwAAUWU4TgEARBkOAMBwAACGAwDAcAAAhgMAqGE4DvziFABAlOEAAA\
         wHAGA4AAAMBwDQiuE4DQAQZTgAAMMBABgOAIDOw3Hwl6cBAKIMBwBgOAAAwwEAYDgAAMMBANQxHCMAAFHNoV+NAABEGQ\
         4AwHAAAIYDAMBwAACGAwAwHAAAhgMAMBwAAGU4Dv96BAAgqgzHGQCAKMMBABgOAMBwAAAYDgDAcAAANQzHkd+cAQCIMh\
         wAgOEAAAwHAEA3w3EWACDKcAAAhgMAMBwAAIYDAGjBcBz97VkAgCjDAQAYDgDAcAAAGA4AwHAAAHUMxygAQFRz7HejAA\
         BRhgMAMBwAgOEAADAcAIDhAAAMBwCA4QAADAcAQBmO478fBQCIKsNxDgAgynAAAIYDADAcAACGAwAwHABADcNx4g/nAA\
         CiDAcAYDgAAMMBAGA4AIBWDMd5AIAowwEAGA4AwHAAAHQejpN/PA8AEGU4AADDAQAYDgAAwwEAGA4AoI7hGAMAiGpOvT\
         sGABBlOAAAwwEAGA4AAMMBABgOAMBwAAAYDgDAcAAAlOE4/d4YAEBUGY4LAABRhgMAMBwAgOEAADAcAIDhAABqGI6RP1\
         0AAIgyHACA4QAADAcAQDfDcREAIMpwAACGAwAwHAAAhgMAaMFwnPnzRQCAKMMBABgOAMBwAAAYDgDAcAAAdQzHOABAVH\
         P2L+MAAFGGAwAwHACA4QAAMBwAgOEAAAwHAIDhAAAMBwBAGY7Rv44DAESV4bgEABBlOAAAwwEAGA4AAMMBABgOAKCG4T\
         j3t0sAAFGGAwAwHACA4QAAMBwAQCuG4zIAQJThAAAMBwBgOAAAOg/H+b9fBgCIMhwAgOEAAAwHAIDhAAAMBwBQx3BMAA\
         BENWPvTwAARBkOAMBwAACGAwDAcAAAhgMAMBwAAIYDADAcAABlOC58MAEAEFWG4woAQJThAAAMBwBgOAAADAcAYDgAgB\
         qG4+KHVwAAogwHAGA4AADDAQDQzXBcBQCIMhwAgOEAAAwHAIDhAABaMBzjH10FAIgyHACA4QAADAcAgOEAAAwHAFDHcE\
         wCAEQ1l/4xCQAQZTgAAMMBABgOAADDAQAYDgDAcAAAGA4AwHAAAJThuPzPSQCAqDIc1wAAogwHAGA4AADDAQBgOAAAww\
         EA1DAcE/+6BgAQZTgAAMMBABgOAADDAQC0YjiuAwBEGQ4AwHAAAIYDAKDzcFz593UAgCjDAQAYDgDAcAAAGA4AwHAAAH\
         UMxxQAQFRz9T9TAABRhgMAMBwAgOEAADAcAIDhAAAMBwCA4QAADAcAQBmOyf9OAQBEleG4AQAQZTgAAMMBABgOAADDAQ\
         AYDgCghuG49r8bAABRhgMAMBwAgOEAAOhmOG4CAEQZDgDAcAAAhgMAwHAAAC0Yjuv/vwkAEGU4AADDAQAYDgAAwwEAGA\
         4AoI7hmAYAiGqmPp4GAIgyHACA4QAADAcAgOEAAAwHAGA4AAAMBwBgOAAAynDc+GQaACCqDMctAIAowwEAGA4AwHAAAB\
         gOAMBwAAA1DMfNT28BAEQZDgDAcAAAhgMAwHAAAK0YjtsAAFGGAwAwHACA4QAA6Dwc05/dBgCIMhwAgOEAAAwHAIDhAA\
         AMBwBQx3DMAABENbc+nwEAiDIcAIDhAAAMBwCA4QAADAcAYDgAAAwHAGA4AADKcNz+YgYAIKoMxx0AgCjDAQAYDgDAcA\
         AAGA4AwHAAADUMx8yXdwAAogwHAGA4AADDAQDQzXDcBQCIMhwAgOEAAAwHAIDhAABaMBx3vroLABBlOAAAwwEAGA4AAM\
         MBABgOAKCO4ZgFAIhq7n49CwAQZTgAAMMBABgOAADDAQAYDgDAcAAAGA4AwHAAAJThmP1mFgAgqgzHPQCAKMMBABgOAM\
         BwAAAYDgDAcAAANQzHvW/vAQBEGQ4AwHAAAIYDAMBwAACtGI77AABRhgMAMBwAgOEAAOg8HPe/uw8AEGU4AADDAQAYDg\
         AAwwEAGA4AoI7heAAAENU8+P4BAECU4QAADAcAYDgAADoPx7q1QwAAUYYDADAcAIDhAAAwHACA4QAADAcAgOEAAAwHAE\
         AZjjfXDgEARBkOAGAOhmPNEABAlOEAAAwHAGA4AAAMBwBgOACAOoZjKQBAlOEAAAwHAGA4AAAMBwBgOAAAwwEA0IPheG\
         PNUgCAKMMBABgOAMBwAAAYDgDAcAAAhgMAwHAAAIYDAODhcKxeCgAQZTgAAMMBABgOAADDAQAYDgDAcAAAGA4AYD4Mx+\
         urlwIARBkOAMBwAACGAwDAcAAAhgMAMBwAAD0ZjkEAgCjDAQAYDgDAcAAAGA4AwHAAAFUMx/AgAECU4QAA8sPx2vAgAE\
         CU4QAADAcAYDgAAAwHAGA4AADDAQBgOAAAwwEAYDgAAMMBABgOAADDAQAYDgDAcAAAGA4AwHAAADwajleHBwEAogwHAD\
         AHw7FqEAAgynAAAIYDADAcAACGAwAwHABAHcOxBAAgynAAAIYDADAcAACGAwAwHACA4QAA6MFwvLJqCQBAlOEAAAwHAG\
         A4AAAMBwBgOAAAwwEAYDgAgHkxHCuXAABEGQ4AwHAAAIYDAMBwAACGAwAwHAAAhgMAMBwAAGU4Xl65BAAgynAAAIYDAD\
         AcAACGAwAwHACA4QAA6MlwDAAARBkOAMBwAACGAwDAcAAAhgMAqGI4VgwAAEQZDgAgPxwvrRgAAIgyHACA4QAADAcAgO\
         EAAAwHAGA4AAAMBwBgOAAADAcAYDgAAMMBAGA4AADDAQAYDgAAwwEAGA4AgEfD8eKKAQCAKMMBAMzBcDw9AAAQZTgAAM\
         MBABgOAADDAQAYDgCgjuFYDAAQZTgAAMMBABgOAADDAQAYDgDAcAAA9GA4Xnh6MQBAlOEAAAwHAGA4AAAMBwBgOAAAww\
         EAYDgAAMMBAPBwOJ5aDAAQZTgAAMMBABgOAADDAQAYDgDAcAAAGA4AYD4Mx/NPLQYAiDIcAIDhAAAMBwCA4QAADAcAYD\
         gAAHoyHP0AAFGGAwAwHACA4QAAMBwAgOEAAKoYjuX9AABRhgMAyA/Hc8v7AQCiDAcAYDgAAMMBAGA4AADDAQAYDgAAww\
         EAGA4AAMMBABgOAMBwAAAYDgDAcAAAhgMAwHAAAIYDAODRcDy7vB8AIMpwAABzMBxP9gMARBkOAMBwAACGAwDAcAAAhg\
         MAqGM4FgEARBkOAMBwAACGAwDAcAAAhgMAMBwAAD0YjmeeXAQAEGU4AADDAQAYDgAAwwEAGA4AwHAAABgOAGBeDMcTiw\
         AAogwHAGA4AADDAQBgOAAAwwEAGA4AAMMBABgOAIAyHGufWAQAEGU4AADDAQAYDgAAwwEAGA4AwHAAAPRkOPoAAKIMBw\
         BgOAAAwwEAYDgAAMMBAFQxHMv6AACiDAcAkB+ONcv6AACiDAcAYDgAAMMBAGA4AADDAQAYDgAAwwEAGA4AAMMBABgOAM\
         BwAAAYDgDAcAAAhgMAwHAAAIYDAODRcKxe1gcAEGU4AIA5GI7H+wAAogwHAGA4AADDAQBgOAAAwwEA1DEcCwEAogwHAG\
         A4AADDAQBgOAAAwwEAGA4AgB4Mx/DjCwEAogwHAGA4AADDAQBgOAAAwwEAGA4AAMMBABgOAICHw/HYQgCAKMMBABgOAM\
         BwAAAYDgDAcAAAhgMAwHAAAPNhOFY9thAAIMpwAACGAwAwHAAAhgMAMBwAgOEAAOjJcCwAAIgyHACA4QAADAcAgOEAAA\
         wHAFDFcAwtAACIMhwAQH44Vg4tAACIMhwAgOEAAAwHAIDhAAAMBwBgOAAADAcAMA/8AOPNgAmQVKQVAAAAAElFTkSuQm\
         CC",
    ),
];
